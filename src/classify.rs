#![deny(missing_docs)]

//! # Type Classification
//!
//! Decides whether a resolved return type is void, a container, or a plain type.
//! Containers unwrap exactly one level; nested element types are left to the
//! naming collaborator.

use crate::error::{AppError, AppResult};
use crate::types::ResolvedType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Ordered sequence containers.
const LIST_TYPES: &[&str] = &["Vec", "VecDeque", "LinkedList", "BinaryHeap"];

/// Set-like containers.
const SET_TYPES: &[&str] = &["HashSet", "BTreeSet", "IndexSet"];

/// The flavour of a homogeneous container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// `Vec<T>` and other ordered sequences.
    List,
    /// `HashSet<T>`, `BTreeSet<T>`, `IndexSet<T>`.
    Set,
    /// `[T; N]` and `[T]`.
    Array,
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => write!(f, "list"),
            ContainerKind::Set => write!(f, "set"),
            ContainerKind::Array => write!(f, "array"),
        }
    }
}

/// Returns true only for the "no content" marker `()`.
pub fn is_void(ty: &ResolvedType) -> bool {
    matches!(ty, ResolvedType::Unit)
}

/// Returns the container kind, or `None` for plain types.
///
/// Maps are keyed structures and therefore plain types.
/// A named container without a type argument is not treated as a container.
pub fn container_kind(ty: &ResolvedType) -> Option<ContainerKind> {
    match ty {
        ResolvedType::Array(_) => Some(ContainerKind::Array),
        ResolvedType::Named { name, args } if !args.is_empty() => {
            if LIST_TYPES.contains(&name.as_str()) {
                Some(ContainerKind::List)
            } else if SET_TYPES.contains(&name.as_str()) {
                Some(ContainerKind::Set)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Returns true for arrays, slices, sequences and sets.
pub fn is_container(ty: &ResolvedType) -> bool {
    container_kind(ty).is_some()
}

/// Extracts the single element type of a container.
///
/// Fails with `AppError::Classification` when `ty` is not a container.
pub fn element_type(ty: &ResolvedType) -> AppResult<&ResolvedType> {
    if !is_container(ty) {
        return Err(AppError::Classification(format!(
            "{} is not a container type",
            ty
        )));
    }
    match ty {
        ResolvedType::Array(inner) => Ok(&**inner),
        ResolvedType::Named { args, .. } => args
            .first()
            .ok_or_else(|| AppError::Classification(format!("{} has no element type", ty))),
        _ => Err(AppError::Classification(format!(
            "{} is not a container type",
            ty
        ))),
    }
}
