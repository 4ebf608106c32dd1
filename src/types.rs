#![deny(missing_docs)]

//! # Resolved Types
//!
//! A plain-data representation of a handler's declared return type.
//! Parsed once from Rust type syntax, then inspected by the classifier,
//! the alternate-type rules and the naming collaborator.

use crate::error::{AppError, AppResult};
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs, HasModuleItem};
use ra_ap_syntax::{AstNode, SourceFile};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A resolved Rust type, reduced to the shapes response documentation cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResolvedType {
    /// The unit type `()`, the "no content" marker.
    Unit,
    /// A path type, identified by its last segment (e.g. `Vec`, `User`, `Json`).
    Named {
        /// The last path segment.
        name: String,
        /// Type arguments in declaration order. Lifetimes and consts are dropped.
        args: Vec<ResolvedType>,
    },
    /// A fixed-size array `[T; N]` or a slice `[T]`.
    Array(Box<ResolvedType>),
    /// A tuple with at least one member; `(T,)` is a one-element tuple.
    Tuple(Vec<ResolvedType>),
}

impl ResolvedType {
    /// Creates a non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        ResolvedType::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a generic named type (e.g. `Vec<User>`).
    pub fn generic(name: impl Into<String>, args: Vec<ResolvedType>) -> Self {
        ResolvedType::Named {
            name: name.into(),
            args,
        }
    }

    /// Parses a Rust type string (e.g. `web::Json<Vec<User>>`).
    ///
    /// References and parentheses are stripped. Trait objects, `impl Trait`,
    /// function pointers, raw pointers and `!` are rejected.
    pub fn parse(rust_type: &str) -> AppResult<Self> {
        // Wrap in a type alias so the parser sees a complete item
        let code = format!("type _Wrapper = {};", rust_type);
        let parse = SourceFile::parse(&code, Edition::Edition2021);
        if !parse.errors().is_empty() {
            return Err(AppError::TypeParse(format!(
                "Failed to parse type string: {}",
                rust_type
            )));
        }
        let file = parse.tree();

        // Anything after the type (e.g. `User; type X = Y;`) adds items to the file
        let mut items = file.items();
        let alias = match (items.next(), items.next()) {
            (Some(ast::Item::TypeAlias(alias)), None) => alias,
            _ => {
                return Err(AppError::TypeParse(format!(
                    "Expected a single type: {}",
                    rust_type
                )))
            }
        };

        let root_type = alias
            .ty()
            .ok_or_else(|| AppError::TypeParse(format!("Invalid type syntax: {}", rust_type)))?;

        from_ast(&root_type)
    }

    /// The name of a `Named` type.
    pub fn name(&self) -> Option<&str> {
        match self {
            ResolvedType::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The type arguments of a `Named` type (empty for every other shape).
    pub fn args(&self) -> &[ResolvedType] {
        match self {
            ResolvedType::Named { args, .. } => args,
            _ => &[],
        }
    }
}

fn from_ast(ty: &ast::Type) -> AppResult<ResolvedType> {
    match ty {
        ast::Type::PathType(path_type) => {
            let segment = path_type
                .path()
                .and_then(|p| p.segment())
                .ok_or_else(|| AppError::TypeParse("Empty path".into()))?;
            let name = segment
                .name_ref()
                .ok_or_else(|| AppError::TypeParse("No type name".into()))?
                .text()
                .as_str()
                .to_owned();

            let mut args = Vec::new();
            if let Some(list) = segment.generic_arg_list() {
                for arg in list.generic_args() {
                    // Lifetimes and const generics carry no schema information
                    if let ast::GenericArg::TypeArg(type_arg) = arg {
                        let inner = type_arg
                            .ty()
                            .ok_or_else(|| AppError::TypeParse("Invalid generic type".into()))?;
                        args.push(from_ast(&inner)?);
                    }
                }
            }
            Ok(ResolvedType::Named { name, args })
        }
        ast::Type::RefType(ref_type) => {
            let inner = ref_type
                .ty()
                .ok_or_else(|| AppError::TypeParse("Invalid reference".into()))?;
            from_ast(&inner)
        }
        ast::Type::ParenType(paren) => {
            let inner = paren
                .ty()
                .ok_or_else(|| AppError::TypeParse("Empty parentheses".into()))?;
            from_ast(&inner)
        }
        ast::Type::ArrayType(array) => {
            let inner = array
                .ty()
                .ok_or_else(|| AppError::TypeParse("Invalid array element".into()))?;
            Ok(ResolvedType::Array(Box::new(from_ast(&inner)?)))
        }
        ast::Type::SliceType(slice) => {
            let inner = slice
                .ty()
                .ok_or_else(|| AppError::TypeParse("Invalid slice element".into()))?;
            Ok(ResolvedType::Array(Box::new(from_ast(&inner)?)))
        }
        ast::Type::TupleType(tuple) => {
            let items = tuple
                .fields()
                .map(|field| from_ast(&field))
                .collect::<AppResult<Vec<_>>>()?;
            if items.is_empty() {
                Ok(ResolvedType::Unit)
            } else {
                Ok(ResolvedType::Tuple(items))
            }
        }
        other => Err(AppError::TypeParse(format!(
            "Unsupported type structure: {}",
            other.syntax().text()
        ))),
    }
}

impl Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Unit => write!(f, "()"),
            ResolvedType::Named { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "<{}>", join(args))?;
                }
                Ok(())
            }
            ResolvedType::Array(inner) => write!(f, "[{}]", inner),
            ResolvedType::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            ResolvedType::Tuple(items) => write!(f, "({})", join(items)),
        }
    }
}

fn join(types: &[ResolvedType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for ResolvedType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolvedType::parse(s)
    }
}

impl TryFrom<String> for ResolvedType {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ResolvedType::parse(&value)
    }
}

impl From<ResolvedType> for String {
    fn from(ty: ResolvedType) -> Self {
        ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_generic() {
        assert_eq!(
            ResolvedType::parse("User").unwrap(),
            ResolvedType::named("User")
        );
        assert_eq!(
            ResolvedType::parse("Vec<User>").unwrap(),
            ResolvedType::generic("Vec", vec![ResolvedType::named("User")])
        );
    }

    #[test]
    fn test_parse_strips_paths_and_references() {
        let ty = ResolvedType::parse("web::Json<&'static [models::Order]>").unwrap();
        assert_eq!(
            ty,
            ResolvedType::generic(
                "Json",
                vec![ResolvedType::Array(Box::new(ResolvedType::named("Order")))]
            )
        );
    }

    #[test]
    fn test_parse_drops_lifetimes() {
        let ty = ResolvedType::parse("Cow<'a, str>").unwrap();
        assert_eq!(ty, ResolvedType::generic("Cow", vec![ResolvedType::named("str")]));
    }

    #[test]
    fn test_parse_unit_and_tuples() {
        assert_eq!(ResolvedType::parse("()").unwrap(), ResolvedType::Unit);
        assert_eq!(
            ResolvedType::parse("(i32, String)").unwrap(),
            ResolvedType::Tuple(vec![
                ResolvedType::named("i32"),
                ResolvedType::named("String")
            ])
        );
    }

    #[test]
    fn test_parse_single_element_tuple() {
        let ty = ResolvedType::parse("(User,)").unwrap();
        assert_eq!(ty, ResolvedType::Tuple(vec![ResolvedType::named("User")]));
        assert_eq!(ty.to_string(), "(User,)");
        // Parentheses alone only group
        assert_eq!(ResolvedType::parse("(User)").unwrap(), ResolvedType::named("User"));
    }

    #[test]
    fn test_parse_rejects_trailing_items() {
        assert!(matches!(
            ResolvedType::parse("User; type X = Other"),
            Err(AppError::TypeParse(_))
        ));
        assert!(matches!(
            ResolvedType::parse("User; struct Extra;"),
            Err(AppError::TypeParse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        assert!(matches!(
            ResolvedType::parse("impl Responder"),
            Err(AppError::TypeParse(_))
        ));
        assert!(ResolvedType::parse("Vec<User").is_err());
    }

    #[test]
    fn test_display_round_trips_shape() {
        let ty = ResolvedType::parse("Result<HashMap<String, Vec<User>>, Error>").unwrap();
        assert_eq!(ty.to_string(), "Result<HashMap<String, Vec<User>>, Error>");
        assert_eq!(ResolvedType::parse("[u8; 4]").unwrap().to_string(), "[u8]");
    }

    #[test]
    fn test_serde_as_string() {
        let ty: ResolvedType = serde_json::from_str("\"Vec<User>\"").unwrap();
        assert_eq!(ty.name(), Some("Vec"));
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"Vec<User>\"");
    }
}
