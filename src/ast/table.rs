//! Named relations with optional aliases.

use serde::{Deserialize, Serialize};

use super::{Join, JoinKind, Node, factory};

/// A table reference. Quoting of the name and alias is delegated to the
/// connection at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// An alias equal to the table name is collapsed away at construction, so
    /// the compiled output never repeats the identifier.
    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into();
        let alias = alias.into();
        let alias = if alias == name { None } else { Some(alias) };
        Self { name, alias }
    }

    /// Build an unconstrained inner join against `to`.
    pub fn create_join(&self, to: impl Into<Node>) -> Option<Join> {
        factory::create_join(to)
    }

    /// Build an inner join against `to`, constrained by `ON`.
    pub fn create_join_on(
        &self,
        to: impl Into<Node>,
        constraint: impl Into<Node>,
    ) -> Option<Join> {
        factory::create_join_on(to, constraint)
    }

    /// Build a join of the requested kind.
    pub fn create_join_of(
        &self,
        kind: JoinKind,
        to: impl Into<Node>,
        constraint: Option<Node>,
    ) -> Option<Join> {
        factory::create_join_of(kind, to, constraint)
    }

    /// Build a join from a raw SQL fragment.
    pub fn create_string_join(&self, to: impl Into<Node>) -> Option<Join> {
        factory::create_string_join(to)
    }
}
