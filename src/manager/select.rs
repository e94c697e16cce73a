//! SELECT statement builder.

use crate::ast::{JoinSource, Limit, Lock, Node, Offset, SelectCore, SelectStatement, With};
use crate::collector::Collector;
use crate::visitor::Visitor;

use super::TreeManager;

/// Fluent builder owning a single SELECT statement tree.
///
/// Builder methods target the statement's last core (the context), matching
/// how UNION-style statements are grown core by core.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectManager {
    pub ast: SelectStatement,
}

impl SelectManager {
    pub fn new() -> Self {
        Self {
            ast: SelectStatement::new(),
        }
    }

    fn context_mut(&mut self) -> &mut SelectCore {
        // a select statement always carries at least one core
        self.ast
            .cores
            .last_mut()
            .expect("select statement with no cores")
    }

    /// Set the primary relation, or append a join to the FROM clause.
    ///
    /// Strings are wrapped as raw [`SqlLiteral`](crate::SqlLiteral)
    /// fragments. Repeated calls with a relation overwrite the left side;
    /// joins accumulate in call order.
    pub fn from(mut self, source: impl Into<Node>) -> Self {
        let node = source.into();
        let join_source = self
            .context_mut()
            .source
            .get_or_insert_with(JoinSource::default);

        match node {
            Node::Join(join) => join_source.right.push(join),
            node => join_source.left = Some(Box::new(node)),
        }
        self
    }

    /// Append a projection to the current core.
    pub fn project(mut self, projection: impl Into<Node>) -> Self {
        let node = projection.into();
        self.context_mut().projections.push(node);
        self
    }

    /// Append a where-predicate; predicates are AND-joined at compile time.
    pub fn filter(mut self, predicate: impl Into<Node>) -> Self {
        let node = predicate.into();
        self.context_mut().wheres.push(node);
        self
    }

    /// Append a grouping expression.
    pub fn group(mut self, expr: impl Into<Node>) -> Self {
        let node = expr.into();
        self.context_mut().groups.push(node);
        self
    }

    /// Append a having-predicate; predicates are AND-joined at compile time.
    pub fn having(mut self, predicate: impl Into<Node>) -> Self {
        let node = predicate.into();
        self.context_mut().havings.push(node);
        self
    }

    /// Mark the current core DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.context_mut().set_quantifier = Some(Node::Distinct);
        self
    }

    /// Append an order expression to the statement.
    pub fn order(mut self, expr: impl Into<Node>) -> Self {
        self.ast.orders.push(expr.into());
        self
    }

    /// Cap the row count; the last call wins.
    pub fn take(mut self, amount: i64) -> Self {
        self.ast.limit = Some(Limit::new(amount));
        self
    }

    /// Set the statement offset; the last call wins.
    pub fn offset(self, amount: i64) -> Self {
        self.skip(amount)
    }

    /// Alias of [`offset`](Self::offset).
    pub fn skip(mut self, amount: i64) -> Self {
        self.ast.offset = Some(Offset::new(amount));
        self
    }

    /// Set the locking clause; the expression carries its own text
    /// (e.g. `FOR UPDATE`).
    pub fn lock(mut self, locking: impl Into<Node>) -> Self {
        self.ast.lock = Some(Lock::new(locking));
        self
    }

    /// Set the CTE prefix compiled ahead of the first core.
    pub fn with(mut self, expr: impl Into<Node>) -> Self {
        self.ast.with = Some(With::new(expr));
        self
    }
}

impl TreeManager for SelectManager {
    fn accept(&self, visitor: &dyn Visitor, collector: &mut Collector) {
        visitor.visit_select_statement(&self.ast, collector);
    }
}
