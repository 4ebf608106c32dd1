#![deny(missing_docs)]

//! # Operation Context
//!
//! Everything a reader plugin sees while documenting one operation: the
//! handler descriptor, the alternate-type hook, the global response table and
//! the builder that collects the output.

use crate::alternate::AlternateTypeProvider;
use crate::config::GlobalResponses;
use crate::descriptor::ResponseDescriptor;
use crate::error::AppResult;
use crate::status::{HandlerDescriptor, HttpMethod};
use crate::types::ResolvedType;
use indexmap::IndexSet;
use serde::Serialize;

/// The documentation format being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentationType {
    /// Swagger 1.2
    Swagger12,
    /// Swagger 2.0
    Swagger2,
    /// OpenAPI 3.x
    OpenApi3,
}

/// A step that contributes to an operation's documentation.
pub trait OperationBuilderPlugin {
    /// Reads from `ctx` and writes into its operation builder.
    fn apply(&self, ctx: &mut OperationContext<'_>) -> AppResult<()>;

    /// Whether the plugin takes part in producing `documentation_type`.
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

/// The documented result for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Every documented response, in insertion order.
    pub response_messages: IndexSet<ResponseDescriptor>,
}

/// Accumulates the output of plugins for one operation.
#[derive(Debug, Clone)]
pub struct OperationBuilder {
    method: HttpMethod,
    response_messages: IndexSet<ResponseDescriptor>,
}

impl OperationBuilder {
    /// An empty builder for `method`.
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            response_messages: IndexSet::new(),
        }
    }

    /// Adds `responses` to the collected set.
    ///
    /// Members are keyed by the whole descriptor; nothing already collected is removed.
    pub fn response_messages(
        &mut self,
        responses: impl IntoIterator<Item = ResponseDescriptor>,
    ) -> &mut Self {
        self.response_messages.extend(responses);
        self
    }

    /// Drops every collected response with status `code`.
    pub fn remove_responses_with_code(&mut self, code: u16) -> &mut Self {
        self.response_messages.retain(|r| r.code() != code);
        self
    }

    /// The responses collected so far.
    pub fn collected(&self) -> &IndexSet<ResponseDescriptor> {
        &self.response_messages
    }

    /// Finishes the operation.
    pub fn build(self) -> Operation {
        Operation {
            method: self.method,
            response_messages: self.response_messages,
        }
    }
}

/// Per-operation inputs plus the output sink.
pub struct OperationContext<'a> {
    handler: &'a HandlerDescriptor,
    alternates: &'a dyn AlternateTypeProvider,
    global_responses: &'a GlobalResponses,
    documentation_type: DocumentationType,
    builder: OperationBuilder,
}

impl<'a> OperationContext<'a> {
    /// Creates a context documenting `handler` as OpenAPI 3.
    pub fn new(
        handler: &'a HandlerDescriptor,
        alternates: &'a dyn AlternateTypeProvider,
        global_responses: &'a GlobalResponses,
    ) -> Self {
        Self {
            handler,
            alternates,
            global_responses,
            documentation_type: DocumentationType::OpenApi3,
            builder: OperationBuilder::new(handler.method),
        }
    }

    /// Selects a different documentation format.
    pub fn with_documentation_type(mut self, documentation_type: DocumentationType) -> Self {
        self.documentation_type = documentation_type;
        self
    }

    /// The HTTP method of the handler.
    pub fn http_method(&self) -> HttpMethod {
        self.handler.method
    }

    /// The handler being documented.
    pub fn handler(&self) -> &'a HandlerDescriptor {
        self.handler
    }

    /// The declared return type, before substitution.
    pub fn return_type(&self) -> &'a ResolvedType {
        &self.handler.return_type
    }

    /// Applies the alternate-type hook.
    pub fn alternate_for(&self, ty: &ResolvedType) -> ResolvedType {
        self.alternates.alternate_for(ty)
    }

    /// The global default responses for `method`.
    pub fn global_response_messages(&self, method: HttpMethod) -> IndexSet<ResponseDescriptor> {
        self.global_responses.for_method(method)
    }

    /// The documentation format being produced.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation_type
    }

    /// The output sink.
    pub fn operation_builder(&mut self) -> &mut OperationBuilder {
        &mut self.builder
    }

    /// Runs every plugin that supports the context's documentation type, in order.
    pub fn run(mut self, plugins: &[&dyn OperationBuilderPlugin]) -> AppResult<Operation> {
        for plugin in plugins {
            if plugin.supports(self.documentation_type) {
                plugin.apply(&mut self)?;
            }
        }
        Ok(self.into_operation())
    }

    /// Finishes the context, yielding the documented operation.
    pub fn into_operation(self) -> Operation {
        self.builder.build()
    }
}
