#![deny(missing_docs)]

//! # CDD Responses
//!
//! Derives the documented responses of an API operation from its handler
//! signature: status code, message and a reference to the body model.
//!
//! ```
//! use cdd_responses::{
//!     AlternateTypeRules, GlobalResponses, HandlerDescriptor, HttpMethod, OperationContext,
//!     ResolvedType, ResponseMessagesReader,
//! };
//!
//! let handler = HandlerDescriptor::new(
//!     HttpMethod::Post,
//!     ResolvedType::parse("web::Json<Order>").unwrap(),
//! )
//! .with_status(201, "Created");
//! let rules = AlternateTypeRules::web_defaults();
//! let globals = GlobalResponses::defaults();
//!
//! let operation = OperationContext::new(&handler, &rules, &globals)
//!     .run(&[&ResponseMessagesReader::standard()])
//!     .unwrap();
//! assert!(operation.response_messages.iter().any(|r| r.code() == 201));
//! ```

/// Shared error types.
pub mod error;

/// Plain-data return types.
pub mod types;

/// Void / container / plain classification.
pub mod classify;

/// Handler descriptors and status resolution.
pub mod status;

/// Derived naming contexts.
pub mod context;

/// Model naming.
pub mod naming;

/// Alternate type substitution.
pub mod alternate;

/// Model references.
pub mod model_ref;

/// Response descriptors.
pub mod descriptor;

/// Global default responses.
pub mod config;

/// Operation context and output sink.
pub mod operation;

/// The response messages reader.
pub mod reader;

/// OpenAPI rendering.
pub mod render;

pub use alternate::{AlternateTypeProvider, AlternateTypeRule, AlternateTypeRules, NoAlternates};
pub use classify::{container_kind, element_type, is_container, is_void, ContainerKind};
pub use config::GlobalResponses;
pub use context::ModelContext;
pub use descriptor::ResponseDescriptor;
pub use error::{AppError, AppResult};
pub use model_ref::{build_model_ref, ModelReference};
pub use naming::{DefaultTypeNameExtractor, TypeNameExtractor};
pub use operation::{
    DocumentationType, Operation, OperationBuilder, OperationBuilderPlugin, OperationContext,
};
pub use reader::{DuplicateStatusPolicy, ResponseMessagesReader};
pub use render::to_openapi_responses;
pub use status::{resolve_status, HandlerDescriptor, HttpMethod, StatusOverride};
pub use types::ResolvedType;
