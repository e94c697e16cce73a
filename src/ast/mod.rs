//! Typed AST nodes for SQL statements.
//!
//! Every syntactic unit is a [`Node`] variant so the visitor can dispatch on
//! the concrete kind. Nodes hold data only; all compilation behavior lives in
//! the visitor.

mod factory;
mod nodes;
mod table;

pub use factory::{create_join, create_join_of, create_join_on, create_string_join};
pub use nodes::{
    InsertStatement, Join, JoinKind, JoinSource, Limit, Lock, Offset, On, SelectCore,
    SelectStatement, SqlLiteral, Top, With,
};
pub use table::Table;

use serde::{Deserialize, Serialize};

/// A single element of a query tree.
///
/// Ownership is strictly top-down: a statement owns its cores, a core owns
/// its join source, and so on. No node holds a back-reference to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    SelectStatement(Box<SelectStatement>),
    InsertStatement(Box<InsertStatement>),
    SelectCore(Box<SelectCore>),
    JoinSource(JoinSource),
    Join(Join),
    On(On),
    Table(Table),
    SqlLiteral(SqlLiteral),
    Distinct,
    Top(Top),
    Limit(Limit),
    Offset(Offset),
    Lock(Lock),
    With(With),
    Integer(i64),
}

/// Fieldless mirror of the [`Node`] discriminant, used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    SelectStatement,
    InsertStatement,
    SelectCore,
    JoinSource,
    Join,
    On,
    Table,
    SqlLiteral,
    Distinct,
    Top,
    Limit,
    Offset,
    Lock,
    With,
    Integer,
}

impl Node {
    /// The concrete kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::SelectStatement(_) => NodeKind::SelectStatement,
            Node::InsertStatement(_) => NodeKind::InsertStatement,
            Node::SelectCore(_) => NodeKind::SelectCore,
            Node::JoinSource(_) => NodeKind::JoinSource,
            Node::Join(_) => NodeKind::Join,
            Node::On(_) => NodeKind::On,
            Node::Table(_) => NodeKind::Table,
            Node::SqlLiteral(_) => NodeKind::SqlLiteral,
            Node::Distinct => NodeKind::Distinct,
            Node::Top(_) => NodeKind::Top,
            Node::Limit(_) => NodeKind::Limit,
            Node::Offset(_) => NodeKind::Offset,
            Node::Lock(_) => NodeKind::Lock,
            Node::With(_) => NodeKind::With,
            Node::Integer(_) => NodeKind::Integer,
        }
    }
}

// Raw strings entering the tree are taken as pre-formatted SQL fragments.
impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::SqlLiteral(SqlLiteral::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::SqlLiteral(SqlLiteral::new(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<SelectStatement> for Node {
    fn from(value: SelectStatement) -> Self {
        Node::SelectStatement(Box::new(value))
    }
}

impl From<InsertStatement> for Node {
    fn from(value: InsertStatement) -> Self {
        Node::InsertStatement(Box::new(value))
    }
}

impl From<SelectCore> for Node {
    fn from(value: SelectCore) -> Self {
        Node::SelectCore(Box::new(value))
    }
}

impl From<JoinSource> for Node {
    fn from(value: JoinSource) -> Self {
        Node::JoinSource(value)
    }
}

impl From<Join> for Node {
    fn from(value: Join) -> Self {
        Node::Join(value)
    }
}

impl From<On> for Node {
    fn from(value: On) -> Self {
        Node::On(value)
    }
}

impl From<Table> for Node {
    fn from(value: Table) -> Self {
        Node::Table(value)
    }
}

impl From<SqlLiteral> for Node {
    fn from(value: SqlLiteral) -> Self {
        Node::SqlLiteral(value)
    }
}

impl From<Top> for Node {
    fn from(value: Top) -> Self {
        Node::Top(value)
    }
}

impl From<Limit> for Node {
    fn from(value: Limit) -> Self {
        Node::Limit(value)
    }
}

impl From<Offset> for Node {
    fn from(value: Offset) -> Self {
        Node::Offset(value)
    }
}

impl From<Lock> for Node {
    fn from(value: Lock) -> Self {
        Node::Lock(value)
    }
}

impl From<With> for Node {
    fn from(value: With) -> Self {
        Node::With(value)
    }
}
