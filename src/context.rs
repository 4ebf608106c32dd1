#![deny(missing_docs)]

//! # Model Context
//!
//! A chain of types being named. Each nested lookup derives a child context
//! so the naming collaborator can see where it came from.

use crate::types::ResolvedType;

/// The type currently being named, linked to the context it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelContext<'a> {
    ty: ResolvedType,
    parent: Option<&'a ModelContext<'a>>,
}

impl<'a> ModelContext<'a> {
    /// Root context for a handler's return value.
    pub fn return_value(ty: ResolvedType) -> Self {
        Self { ty, parent: None }
    }

    /// Child context for a type reached from `parent`.
    pub fn from_parent(parent: &'a ModelContext<'a>, ty: ResolvedType) -> Self {
        Self {
            ty,
            parent: Some(parent),
        }
    }

    /// The type to be named.
    pub fn ty(&self) -> &ResolvedType {
        &self.ty
    }

    /// The context this one was derived from.
    pub fn parent(&self) -> Option<&'a ModelContext<'a>> {
        self.parent
    }

    /// Number of ancestors (0 for a root context).
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterates over ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a ModelContext<'a>> {
        std::iter::successors(self.parent, |ctx| ctx.parent)
    }

    /// Whether a derived ancestor is already naming the same type.
    ///
    /// The return-value root only marks where naming started and is skipped,
    /// so naming a return type in a context derived from its own root is not
    /// a cycle.
    pub fn has_seen_before(&self, ty: &ResolvedType) -> bool {
        self.ancestors()
            .filter(|ctx| ctx.parent.is_some())
            .any(|ctx| &ctx.ty == ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_contexts_track_ancestry() {
        let root = ModelContext::return_value(ResolvedType::parse("Vec<Node>").unwrap());
        let child = ModelContext::from_parent(&root, ResolvedType::named("Node"));
        let grandchild = ModelContext::from_parent(&child, ResolvedType::named("Node"));

        assert_eq!(root.depth(), 0);
        assert_eq!(grandchild.depth(), 2);
        assert!(grandchild.has_seen_before(&ResolvedType::named("Node")));
        assert!(!child.has_seen_before(&ResolvedType::named("Node")));
        assert_eq!(child.parent(), Some(&root));
    }

    #[test]
    fn test_return_value_root_is_not_a_cycle() {
        let page = ResolvedType::parse("Page<User>").unwrap();
        let root = ModelContext::return_value(page.clone());
        let named = ModelContext::from_parent(&root, page.clone());
        let nested = ModelContext::from_parent(&named, page.clone());

        assert!(!named.has_seen_before(&page));
        assert!(nested.has_seen_before(&page));
    }
}
