//! INSERT statement builder.

use crate::ast::{InsertStatement, Node, SelectStatement, SqlLiteral, Table};
use crate::collector::Collector;
use crate::visitor::Visitor;

use super::TreeManager;

/// Fluent builder owning a single INSERT statement tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsertManager {
    pub ast: InsertStatement,
}

impl InsertManager {
    pub fn new() -> Self {
        Self {
            ast: InsertStatement::new(),
        }
    }

    /// Set the target relation.
    pub fn into(mut self, table: Table) -> Self {
        self.ast.relation = Some(table);
        self
    }

    /// Assign a raw fields fragment (typically a whole `VALUES(...)` clause)
    /// as the statement's values.
    ///
    /// This is a low-level escape hatch: the text is neither validated nor
    /// parsed, and empty input is ignored.
    pub fn insert(mut self, fields: &str) -> Self {
        if fields.is_empty() {
            return self;
        }
        self.ast.values = Some(Node::SqlLiteral(SqlLiteral::new(fields)));
        self
    }

    /// Append column names; they are quoted at compile time.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ast
            .columns
            .extend(columns.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    /// Source rows from a nested SELECT instead of literal values.
    ///
    /// Ignored at compile time when `values` is also set.
    pub fn select(mut self, statement: SelectStatement) -> Self {
        self.ast.select = Some(Node::from(statement));
        self
    }
}

impl TreeManager for InsertManager {
    fn accept(&self, visitor: &dyn Visitor, collector: &mut Collector) {
        visitor.visit_insert_statement(&self.ast, collector);
    }
}
