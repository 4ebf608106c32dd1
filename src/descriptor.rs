//! # Response Descriptors
//!
//! One row of an operation's "possible responses" table.

use crate::model_ref::ModelReference;
use serde::{Deserialize, Serialize};

/// A documented HTTP response: status code, message and optional body model.
///
/// Equality and hashing cover every field, so two descriptors sharing a code
/// but differing in message or model are distinct set members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_model: Option<ModelReference>,
}

impl ResponseDescriptor {
    /// A descriptor without a body model.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: None,
        }
    }

    /// Returns a copy carrying `model` as the body model.
    pub fn with_model(mut self, model: Option<ModelReference>) -> Self {
        self.response_model = model;
        self
    }

    /// The HTTP status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The body model, if any.
    pub fn response_model(&self) -> Option<&ModelReference> {
        self.response_model.as_ref()
    }
}
