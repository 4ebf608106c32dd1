#![deny(missing_docs)]

//! # Type Naming
//!
//! Assigns canonical model names to resolved types.
//!
//! The response reader only depends on the [`TypeNameExtractor`] trait; the
//! model registry of a larger generator plugs in here. [`DefaultTypeNameExtractor`]
//! covers primitives, user models and generic wrappers without a registry.

use crate::classify::{container_kind, ContainerKind};
use crate::context::ModelContext;
use crate::error::{AppError, AppResult};
use crate::types::ResolvedType;
use indexmap::IndexMap;

/// Keyed structures, named `Map«K,V»`.
const MAP_TYPES: &[&str] = &["HashMap", "BTreeMap", "IndexMap"];

/// Produces the model name of the type carried by a context.
pub trait TypeNameExtractor {
    /// Returns the canonical name of `ctx.ty()`.
    ///
    /// Implementations that recurse into type arguments should derive child
    /// contexts with [`ModelContext::from_parent`].
    fn type_name(&self, ctx: &ModelContext<'_>) -> AppResult<String>;
}

impl<F> TypeNameExtractor for F
where
    F: Fn(&ModelContext<'_>) -> AppResult<String>,
{
    fn type_name(&self, ctx: &ModelContext<'_>) -> AppResult<String> {
        self(ctx)
    }
}

/// Names types the way Swagger tooling conventionally does.
///
/// * Primitives map to `string`, `int`, `long`, `boolean`, `double`, ...
/// * Generic types render as `Page«User»`, maps as `Map«string,User»`.
/// * Nested containers render as `List«User»`, `Set«Tag»`, `Array«int»`.
#[derive(Debug, Clone, Default)]
pub struct DefaultTypeNameExtractor {
    renames: IndexMap<String, String>,
}

impl DefaultTypeNameExtractor {
    /// Creates an extractor with no renames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the Rust type `rust_name` under `model_name`.
    pub fn with_rename(
        mut self,
        rust_name: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        self.renames.insert(rust_name.into(), model_name.into());
        self
    }

    fn child_name(&self, parent: &ModelContext<'_>, ty: &ResolvedType) -> AppResult<String> {
        let child = ModelContext::from_parent(parent, ty.clone());
        self.type_name(&child)
    }
}

impl TypeNameExtractor for DefaultTypeNameExtractor {
    fn type_name(&self, ctx: &ModelContext<'_>) -> AppResult<String> {
        let ty = ctx.ty();
        match ty {
            ResolvedType::Unit => Err(AppError::TypeResolution(
                "The unit type has no model name".into(),
            )),
            ResolvedType::Tuple(_) => Err(AppError::TypeResolution(format!(
                "Tuples cannot be documented as models: {}",
                ty
            ))),
            ResolvedType::Array(elem) => {
                Ok(format!("Array«{}»", self.child_name(ctx, elem)?))
            }
            ResolvedType::Named { name, args } => {
                if let Some(renamed) = self.renames.get(name) {
                    return Ok(renamed.clone());
                }
                if let Some(primitive) = primitive_name(name) {
                    return Ok(primitive.to_string());
                }
                // Self-referential generics stop at the bare name
                if args.is_empty() || ctx.has_seen_before(ty) {
                    return Ok(name.clone());
                }

                let (prefix, named_args) = match container_kind(ty) {
                    Some(ContainerKind::List) => ("List", &args[..1]),
                    Some(ContainerKind::Set) => ("Set", &args[..1]),
                    Some(ContainerKind::Array) => ("Array", &args[..1]),
                    None if MAP_TYPES.contains(&name.as_str()) => ("Map", &args[..]),
                    None => (name.as_str(), &args[..]),
                };

                let inner = named_args
                    .iter()
                    .map(|arg| self.child_name(ctx, arg))
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(format!("{}«{}»", prefix, inner.join(",")))
            }
        }
    }
}

/// Maps Rust primitives and well-known value types to model names.
fn primitive_name(name: &str) -> Option<&'static str> {
    let mapped = match name {
        "String" | "str" | "char" => "string",
        "bool" => "boolean",
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => "int",
        "i64" | "i128" | "isize" | "u64" | "u128" | "usize" => "long",
        "f32" => "float",
        "f64" => "double",
        "Uuid" => "uuid",
        "NaiveDateTime" | "DateTime" => "date-time",
        "NaiveDate" => "date",
        "Value" => "object",
        _ => return None,
    };
    Some(mapped)
}

/// Whether a model name denotes an inline primitive rather than a named schema.
pub fn is_primitive_name(model_name: &str) -> bool {
    matches!(
        model_name,
        "string"
            | "boolean"
            | "int"
            | "long"
            | "float"
            | "double"
            | "uuid"
            | "date-time"
            | "date"
            | "object"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(s: &str) -> AppResult<String> {
        let ctx = ModelContext::return_value(ResolvedType::parse(s).unwrap());
        DefaultTypeNameExtractor::new().type_name(&ctx)
    }

    #[test]
    fn test_primitives() {
        let cases = vec![
            ("String", "string"),
            ("&str", "string"),
            ("i32", "int"),
            ("u64", "long"),
            ("f64", "double"),
            ("bool", "boolean"),
            ("Uuid", "uuid"),
        ];

        for (input, expected) in cases {
            assert_eq!(name_of(input).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_models_and_generics() {
        assert_eq!(name_of("User").unwrap(), "User");
        assert_eq!(name_of("Page<User>").unwrap(), "Page«User»");
        assert_eq!(name_of("HashMap<String, User>").unwrap(), "Map«string,User»");
        assert_eq!(name_of("Vec<Vec<i32>>").unwrap(), "List«List«int»»");
        assert_eq!(name_of("BTreeSet<Tag>").unwrap(), "Set«Tag»");
        assert_eq!(name_of("[User]").unwrap(), "Array«User»");
    }

    #[test]
    fn test_renames_take_precedence() {
        let extractor = DefaultTypeNameExtractor::new().with_rename("UserRow", "User");
        let ctx = ModelContext::return_value(ResolvedType::parse("UserRow").unwrap());
        assert_eq!(extractor.type_name(&ctx).unwrap(), "User");
    }

    #[test]
    fn test_named_from_return_value_root() {
        let page = ResolvedType::parse("Page<User>").unwrap();
        let root = ModelContext::return_value(page.clone());
        let named = ModelContext::from_parent(&root, page);
        let name = DefaultTypeNameExtractor::new().type_name(&named).unwrap();
        assert_eq!(name, "Page«User»");
    }

    #[test]
    fn test_self_reference_stops_descending() {
        let tree = ResolvedType::parse("Tree<Leaf>").unwrap();
        let root = ModelContext::return_value(ResolvedType::parse("Vec<Tree<Leaf>>").unwrap());
        let outer = ModelContext::from_parent(&root, tree.clone());
        let nested = ModelContext::from_parent(&outer, tree);
        let name = DefaultTypeNameExtractor::new().type_name(&nested).unwrap();
        assert_eq!(name, "Tree");
    }

    #[test]
    fn test_unnameable_shapes() {
        assert!(matches!(name_of("()"), Err(AppError::TypeResolution(_))));
        assert!(matches!(
            name_of("(i32, String)"),
            Err(AppError::TypeResolution(_))
        ));
        assert!(matches!(
            name_of("Page<(i32, i32)>"),
            Err(AppError::TypeResolution(_))
        ));
    }

    fn fixed(_: &ModelContext<'_>) -> AppResult<String> {
        Ok("Fixed".into())
    }

    #[test]
    fn test_functions_are_extractors() {
        let ctx = ModelContext::return_value(ResolvedType::named("Anything"));
        assert_eq!(fixed.type_name(&ctx).unwrap(), "Fixed");
    }
}
