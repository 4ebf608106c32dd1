#![deny(missing_docs)]

//! # Response Messages Reader
//!
//! Documents the responses of one operation: seeds the global defaults for
//! its HTTP method, then adds the response computed from the handler's
//! return type and status override.

use crate::context::ModelContext;
use crate::descriptor::ResponseDescriptor;
use crate::error::AppResult;
use crate::model_ref::build_model_ref;
use crate::naming::{DefaultTypeNameExtractor, TypeNameExtractor};
use crate::operation::{OperationBuilderPlugin, OperationContext};
use crate::status::resolve_status;

/// How the computed response interacts with a global default of the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateStatusPolicy {
    /// Plain set union. A global default with the same code but a different
    /// message or model stays next to the computed response.
    #[default]
    KeepAll,
    /// Global defaults sharing the computed response's code are removed first.
    OverrideByCode,
}

/// Derives the response table of an operation.
#[derive(Debug, Clone, Default)]
pub struct ResponseMessagesReader<N = DefaultTypeNameExtractor> {
    names: N,
    duplicates: DuplicateStatusPolicy,
}

impl ResponseMessagesReader {
    /// A reader using [`DefaultTypeNameExtractor`] that keeps duplicate codes.
    pub fn standard() -> Self {
        Self::new(DefaultTypeNameExtractor::new())
    }
}

impl<N: TypeNameExtractor> ResponseMessagesReader<N> {
    /// Creates a reader resolving model names through `names`.
    pub fn new(names: N) -> Self {
        Self {
            names,
            duplicates: DuplicateStatusPolicy::default(),
        }
    }

    /// Selects how same-coded global defaults are treated.
    pub fn with_duplicate_policy(mut self, duplicates: DuplicateStatusPolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Computes the response documented by the handler itself.
    ///
    /// The effective return type is the declared one after alternate-type
    /// substitution. Naming failures abort the computation.
    pub fn response_for(&self, ctx: &OperationContext<'_>) -> AppResult<ResponseDescriptor> {
        let effective = ctx.alternate_for(ctx.return_type());
        tracing::trace!(
            declared = %ctx.return_type(),
            effective = %effective,
            "resolved handler return type"
        );

        let model_ctx = ModelContext::return_value(effective.clone());
        let model = build_model_ref(&effective, &model_ctx, &self.names)?;
        let (code, message) = resolve_status(ctx.handler());

        Ok(ResponseDescriptor::new(code, message).with_model(model))
    }
}

impl<N: TypeNameExtractor> OperationBuilderPlugin for ResponseMessagesReader<N> {
    fn apply(&self, ctx: &mut OperationContext<'_>) -> AppResult<()> {
        let globals = ctx.global_response_messages(ctx.http_method());
        ctx.operation_builder().response_messages(globals);

        let computed = self.response_for(ctx)?;
        tracing::debug!(
            method = %ctx.http_method(),
            code = computed.code(),
            model = ?computed.response_model(),
            "documenting handler response"
        );

        let builder = ctx.operation_builder();
        if self.duplicates == DuplicateStatusPolicy::OverrideByCode {
            builder.remove_responses_with_code(computed.code());
        }
        builder.response_messages([computed]);
        Ok(())
    }
}
