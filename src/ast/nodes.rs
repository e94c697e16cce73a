//! Statement, clause, and expression nodes.
//!
//! All fields are public and directly mutable. Constructors enforce only the
//! construction-time defaults: a select statement starts with exactly one
//! core, and a core starts with an empty join source. Malformed trees are
//! legal and compile to minimal SQL fragments.

use serde::{Deserialize, Serialize};

use super::{Node, Table};

/// Root of a SELECT query: one or more cores plus statement-level options.
///
/// Multiple cores represent UNION-style composition; each core supplies its
/// own leading `SELECT` when compiled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub cores: Vec<SelectCore>,
    pub orders: Vec<Node>,
    pub limit: Option<Limit>,
    pub offset: Option<Offset>,
    pub lock: Option<Lock>,
    pub with: Option<With>,
}

impl SelectStatement {
    pub fn new() -> Self {
        Self {
            cores: vec![SelectCore::new()],
            orders: Vec::new(),
            limit: None,
            offset: None,
            lock: None,
            with: None,
        }
    }
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// One SELECT clause body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCore {
    pub source: Option<JoinSource>,
    pub top: Option<Top>,
    pub set_quantifier: Option<Node>,
    pub projections: Vec<Node>,
    pub wheres: Vec<Node>,
    pub groups: Vec<Node>,
    pub havings: Vec<Node>,
    pub windows: Vec<Node>,
}

impl SelectCore {
    pub fn new() -> Self {
        Self {
            source: Some(JoinSource::default()),
            top: None,
            set_quantifier: None,
            projections: Vec::new(),
            wheres: Vec::new(),
            groups: Vec::new(),
            havings: Vec::new(),
            windows: Vec::new(),
        }
    }
}

impl Default for SelectCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Root of an INSERT statement.
///
/// `values` takes precedence over `select` when both are set; with neither,
/// the statement compiles to the bare INSERT INTO prefix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsertStatement {
    pub relation: Option<Table>,
    pub columns: Vec<String>,
    pub values: Option<Node>,
    pub select: Option<Node>,
}

impl InsertStatement {
    pub fn new() -> Self {
        Self::default()
    }
}

/// FROM-clause source: a primary relation plus appended joins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JoinSource {
    pub left: Option<Box<Node>>,
    pub right: Vec<Join>,
}

impl JoinSource {
    pub fn new(left: impl Into<Node>) -> Self {
        Self {
            left: Some(Box::new(left.into())),
            right: Vec::new(),
        }
    }
}

/// The logical kind of a join, used for factory selection and emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Outer,
    FullOuter,
    RightOuter,
    /// A raw SQL fragment standing in for a whole join clause.
    StringJoin,
}

/// A join: target expression on the left, optional constraint on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub left: Box<Node>,
    pub right: Option<Box<Node>>,
}

/// Join constraint wrapper, emitted as `ON <expr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct On {
    pub expr: Box<Node>,
}

impl On {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

/// Raw SQL text emitted verbatim, bypassing identifier quoting.
///
/// The caller is responsible for any quoting or escaping of the wrapped
/// fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlLiteral(pub String);

impl SqlLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row-count cap, emitted as `LIMIT <expr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub expr: Option<Box<Node>>,
}

impl Limit {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}

/// Row skip, emitted as `OFFSET <expr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub expr: Option<Box<Node>>,
}

impl Offset {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}

/// Row locking clause; the wrapped expression carries its own text
/// (e.g. `FOR UPDATE`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lock {
    pub expr: Option<Box<Node>>,
}

impl Lock {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}

/// Common table expression prefix, emitted as `WITH <expr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    pub expr: Option<Box<Node>>,
}

impl With {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}

/// Row-count cap placed inside the SELECT clause, emitted as `TOP <expr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Top {
    pub expr: Option<Box<Node>>,
}

impl Top {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}
