#![deny(missing_docs)]

//! # Model References
//!
//! Points a response at the schema of its body: either a named type or a
//! container of a named type.

use crate::classify::{container_kind, element_type, is_void, ContainerKind};
use crate::context::ModelContext;
use crate::error::AppResult;
use crate::naming::TypeNameExtractor;
use crate::types::ResolvedType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A reference to the schema of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "reference", rename_all = "snake_case")]
pub enum ModelReference {
    /// A single named type, e.g. `User`.
    Direct {
        /// The canonical model name.
        type_name: String,
    },
    /// A homogeneous container of a named element type, e.g. `list` of `User`.
    Container {
        /// The container flavour.
        container: ContainerKind,
        /// The canonical model name of the element type.
        item_type: String,
    },
}

impl ModelReference {
    /// A direct reference.
    pub fn direct(type_name: impl Into<String>) -> Self {
        ModelReference::Direct {
            type_name: type_name.into(),
        }
    }

    /// A container reference.
    pub fn container(container: ContainerKind, item_type: impl Into<String>) -> Self {
        ModelReference::Container {
            container,
            item_type: item_type.into(),
        }
    }

    /// The referenced name for direct references, the element name otherwise.
    pub fn type_name(&self) -> &str {
        match self {
            ModelReference::Direct { type_name } => type_name,
            ModelReference::Container { item_type, .. } => item_type,
        }
    }

    /// The element name of a container reference.
    pub fn item_type(&self) -> Option<&str> {
        match self {
            ModelReference::Direct { .. } => None,
            ModelReference::Container { item_type, .. } => Some(item_type),
        }
    }

    /// Whether this references a container.
    pub fn is_collection(&self) -> bool {
        matches!(self, ModelReference::Container { .. })
    }
}

impl Display for ModelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelReference::Direct { type_name } => write!(f, "{}", type_name),
            ModelReference::Container {
                container,
                item_type,
            } => write!(f, "{}[{}]", container, item_type),
        }
    }
}

/// Builds the model reference for an effective return type.
///
/// * void → `None`
/// * container → `Container(kind, name of element)`; the element name is
///   resolved in a context derived from `ctx`.
/// * anything else → `Direct(name of type)`
///
/// Naming failures propagate unchanged.
pub fn build_model_ref<N>(
    ty: &ResolvedType,
    ctx: &ModelContext<'_>,
    names: &N,
) -> AppResult<Option<ModelReference>>
where
    N: TypeNameExtractor + ?Sized,
{
    if is_void(ty) {
        return Ok(None);
    }

    if let Some(kind) = container_kind(ty) {
        let element = element_type(ty)?;
        let element_ctx = ModelContext::from_parent(ctx, element.clone());
        let item_type = names.type_name(&element_ctx)?;
        return Ok(Some(ModelReference::container(kind, item_type)));
    }

    let type_ctx = ModelContext::from_parent(ctx, ty.clone());
    let type_name = names.type_name(&type_ctx)?;
    Ok(Some(ModelReference::direct(type_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::naming::DefaultTypeNameExtractor;

    fn build(s: &str) -> AppResult<Option<ModelReference>> {
        let ty = ResolvedType::parse(s).unwrap();
        let root = ModelContext::return_value(ty.clone());
        build_model_ref(&ty, &root, &DefaultTypeNameExtractor::new())
    }

    #[test]
    fn test_void_has_no_model() {
        assert_eq!(build("()").unwrap(), None);
    }

    #[test]
    fn test_container_uses_element_name() {
        assert_eq!(
            build("Vec<User>").unwrap(),
            Some(ModelReference::container(ContainerKind::List, "User"))
        );
        assert_eq!(
            build("HashSet<i64>").unwrap(),
            Some(ModelReference::container(ContainerKind::Set, "long"))
        );
        assert_eq!(
            build("Vec<Vec<User>>").unwrap(),
            Some(ModelReference::container(ContainerKind::List, "List«User»"))
        );
    }

    #[test]
    fn test_plain_types_are_direct() {
        assert_eq!(build("Order").unwrap(), Some(ModelReference::direct("Order")));
        assert_eq!(
            build("HashMap<String, Order>").unwrap(),
            Some(ModelReference::direct("Map«string,Order»"))
        );
        assert_eq!(
            build("Page<User>").unwrap(),
            Some(ModelReference::direct("Page«User»"))
        );
    }

    #[test]
    fn test_naming_failures_propagate() {
        assert!(matches!(
            build("Vec<(i32, i32)>"),
            Err(AppError::TypeResolution(_))
        ));
    }

    fn depth_name(ctx: &ModelContext<'_>) -> AppResult<String> {
        Ok(format!("depth{}", ctx.depth()))
    }

    #[test]
    fn test_names_are_resolved_in_derived_context() {
        let ty = ResolvedType::parse("Vec<User>").unwrap();
        let root = ModelContext::return_value(ty.clone());
        let built = build_model_ref(&ty, &root, &depth_name).unwrap();
        assert_eq!(built.unwrap().type_name(), "depth1");
    }

    #[test]
    fn test_display() {
        assert_eq!(ModelReference::direct("User").to_string(), "User");
        assert_eq!(
            ModelReference::container(ContainerKind::Set, "Tag").to_string(),
            "set[Tag]"
        );
    }
}
