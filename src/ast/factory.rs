//! Construction of join nodes by kind.
//!
//! Construction is a checked outcome: `None` means "join not constructed" and
//! is distinct from a join that was built with no constraint.

use super::{Join, JoinKind, Node, On};

/// Build an unconstrained inner join against `to`.
pub fn create_join(to: impl Into<Node>) -> Option<Join> {
    create_join_of(JoinKind::Inner, to, None)
}

/// Build an inner join against `to`, constrained by `ON`.
pub fn create_join_on(to: impl Into<Node>, constraint: impl Into<Node>) -> Option<Join> {
    create_join_of(JoinKind::Inner, to, Some(constraint.into()))
}

/// Build a join of the requested kind.
///
/// Returns `None` when the kind cannot carry the given pieces: a string join
/// is a raw SQL fragment and has no constraint slot. Constraints that are not
/// already [`On`] nodes are wrapped in one.
pub fn create_join_of(kind: JoinKind, to: impl Into<Node>, constraint: Option<Node>) -> Option<Join> {
    if kind == JoinKind::StringJoin && constraint.is_some() {
        return None;
    }

    let right = constraint.map(|node| match node {
        on @ Node::On(_) => Box::new(on),
        expr => Box::new(Node::On(On::new(expr))),
    });

    Some(Join {
        kind,
        left: Box::new(to.into()),
        right,
    })
}

/// Build a join from a raw SQL fragment standing in for the whole clause.
pub fn create_string_join(to: impl Into<Node>) -> Option<Join> {
    create_join_of(JoinKind::StringJoin, to, None)
}
