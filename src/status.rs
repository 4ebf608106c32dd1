#![deny(missing_docs)]

//! # Status Resolution
//!
//! The statically-typed handler descriptor handed over by route discovery,
//! and the resolution of its HTTP status code and reason phrase.

use crate::error::AppError;
use crate::types::ResolvedType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Status code used when a handler declares no override.
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Canonical reason phrase for [`DEFAULT_STATUS_CODE`].
pub const DEFAULT_REASON: &str = "OK";

/// The HTTP verbs an operation can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Every supported method, in declaration order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// The uppercase verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::Config(format!("Unknown HTTP method: {}", s)))
    }
}

/// An explicit status declared on a handler (e.g. `#[response(status = 201)]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusOverride {
    /// The numeric HTTP status code.
    pub code: u16,
    /// The declared reason text, used verbatim (may be empty).
    #[serde(default)]
    pub reason: String,
}

impl StatusOverride {
    /// Creates a status override.
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

/// Everything the response reader needs to know about one handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    /// The HTTP method the handler is routed under.
    pub method: HttpMethod,
    /// The declared return type, before alternate-type substitution.
    pub return_type: ResolvedType,
    /// The status override, if the handler declares one.
    #[serde(default)]
    pub status: Option<StatusOverride>,
}

impl HandlerDescriptor {
    /// Creates a descriptor without a status override.
    pub fn new(method: HttpMethod, return_type: ResolvedType) -> Self {
        Self {
            method,
            return_type,
            status: None,
        }
    }

    /// Attaches a status override.
    pub fn with_status(mut self, code: u16, reason: impl Into<String>) -> Self {
        self.status = Some(StatusOverride::new(code, reason));
        self
    }
}

/// Resolves the documented status code and message of a handler.
///
/// A declared override wins verbatim, including an empty reason.
/// Without one the handler documents `200 OK`.
pub fn resolve_status(handler: &HandlerDescriptor) -> (u16, String) {
    match &handler.status {
        Some(status) => (status.code, status.reason.clone()),
        None => (DEFAULT_STATUS_CODE, DEFAULT_REASON.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(status: Option<StatusOverride>) -> HandlerDescriptor {
        HandlerDescriptor {
            method: HttpMethod::Get,
            return_type: ResolvedType::named("User"),
            status,
        }
    }

    #[test]
    fn test_default_is_200_ok() {
        assert_eq!(resolve_status(&handler(None)), (200, "OK".to_string()));
    }

    #[test]
    fn test_override_is_verbatim() {
        let h = handler(Some(StatusOverride::new(201, "Created")));
        assert_eq!(resolve_status(&h), (201, "Created".to_string()));
    }

    #[test]
    fn test_empty_reason_is_kept() {
        let h = handler(Some(StatusOverride::new(204, "")));
        assert_eq!(resolve_status(&h), (204, String::new()));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("DELETE".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("FETCH".parse::<HttpMethod>().is_err());
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn test_descriptor_from_yaml() {
        let yaml = "method: POST\nreturn_type: Json<Order>\nstatus:\n  code: 201\n  reason: Created\n";
        let h: HandlerDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(h.method, HttpMethod::Post);
        assert_eq!(h.return_type.to_string(), "Json<Order>");
        assert_eq!(h.status, Some(StatusOverride::new(201, "Created")));
    }
}
