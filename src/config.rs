#![deny(missing_docs)]

//! # Global Responses
//!
//! The per-method table of responses every operation documents by default.
//! It is passed to the reader explicitly instead of living in process-wide state.

use crate::descriptor::ResponseDescriptor;
use crate::error::{AppError, AppResult};
use crate::status::HttpMethod;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default responses keyed by HTTP method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalResponses {
    by_method: IndexMap<HttpMethod, Vec<ResponseDescriptor>>,
}

impl GlobalResponses {
    /// No global responses for any method.
    pub fn none() -> Self {
        Self::default()
    }

    /// The conventional default table.
    pub fn defaults() -> Self {
        let ok = || ResponseDescriptor::new(200, "OK");
        let created = || ResponseDescriptor::new(201, "Created");
        let no_content = || ResponseDescriptor::new(204, "No Content");
        let unauthorized = || ResponseDescriptor::new(401, "Unauthorized");
        let forbidden = || ResponseDescriptor::new(403, "Forbidden");
        let not_found = || ResponseDescriptor::new(404, "Not Found");

        Self::none()
            .with_method(HttpMethod::Get, vec![ok(), unauthorized(), forbidden(), not_found()])
            .with_method(
                HttpMethod::Put,
                vec![created(), unauthorized(), forbidden(), not_found()],
            )
            .with_method(
                HttpMethod::Post,
                vec![created(), unauthorized(), forbidden(), not_found()],
            )
            .with_method(HttpMethod::Delete, vec![no_content(), unauthorized(), forbidden()])
            .with_method(HttpMethod::Patch, vec![no_content(), unauthorized(), forbidden()])
            .with_method(HttpMethod::Head, vec![ok(), no_content()])
            .with_method(HttpMethod::Options, vec![ok(), no_content()])
            .with_method(HttpMethod::Trace, vec![ok(), no_content()])
    }

    /// Replaces the responses configured for `method`.
    pub fn with_method(mut self, method: HttpMethod, responses: Vec<ResponseDescriptor>) -> Self {
        self.by_method.insert(method, responses);
        self
    }

    /// The default responses for `method` (empty when none are configured).
    pub fn for_method(&self, method: HttpMethod) -> IndexSet<ResponseDescriptor> {
        self.by_method
            .get(&method)
            .map(|responses| responses.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Parses a YAML table (`GET: [{code: 200, message: OK}]`).
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a JSON table.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a table from disk. `.json` files are read as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };
        parsed.map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}
