//! The generic SQL emitter.

use crate::ast::{
    InsertStatement, Join, JoinKind, JoinSource, Limit, Lock, Node, Offset, On, SelectCore,
    SelectStatement, SqlLiteral, Table, Top, With,
};
use crate::collector::Collector;
use crate::connection::Connection;

use super::{Visitor, dispatch};

/// Compiles a query tree to ANSI-ish SQL text.
///
/// Each node kind has one emission routine; clause ordering and separators
/// follow SQL grammar. Identifier quoting is delegated to the connection,
/// except [`SqlLiteral`] fragments, which bypass quoting entirely.
pub struct ToSql<'a> {
    connection: &'a dyn Connection,
}

impl<'a> ToSql<'a> {
    pub fn new(connection: &'a dyn Connection) -> Self {
        Self { connection }
    }

    pub(crate) fn select_statement(&self, statement: &SelectStatement, collector: &mut Collector) {
        if let Some(with) = &statement.with {
            self.with(with, collector);
            collector.append(" ");
        }

        // Each core emits its own leading SELECT; no separator between cores.
        for core in &statement.cores {
            self.select_core(core, collector);
        }

        if !statement.orders.is_empty() {
            collector.append(" ORDER BY ");
            self.inject_join(&statement.orders, collector, ", ");
        }

        self.select_options(statement, collector);
    }

    /// Limit, offset, and lock, each space-then-value when present and
    /// skipped entirely when absent.
    fn select_options(&self, statement: &SelectStatement, collector: &mut Collector) {
        if let Some(limit) = &statement.limit {
            collector.append(" ");
            self.limit(limit, collector);
        }
        if let Some(offset) = &statement.offset {
            collector.append(" ");
            self.offset(offset, collector);
        }
        if let Some(lock) = &statement.lock {
            collector.append(" ");
            self.lock(lock, collector);
        }
    }

    pub(crate) fn select_core(&self, core: &SelectCore, collector: &mut Collector) {
        collector.append("SELECT");

        if let Some(top) = &core.top {
            collector.append(" ");
            self.top(top, collector);
        }

        self.maybe_visit(core.set_quantifier.as_ref(), collector);

        if !core.projections.is_empty() {
            collector.append(" ");
            self.inject_join(&core.projections, collector, ", ");
        }

        if let Some(source) = &core.source {
            collector.append(" FROM ");
            self.join_source(source, collector);
        }

        if !core.wheres.is_empty() {
            collector.append(" WHERE ");
            self.inject_join(&core.wheres, collector, " AND ");
        }

        if !core.groups.is_empty() {
            collector.append(" GROUP BY ");
            self.inject_join(&core.groups, collector, ", ");
        }

        if !core.havings.is_empty() {
            collector.append(" HAVING ");
            self.inject_join(&core.havings, collector, " AND ");
        }

        if !core.windows.is_empty() {
            collector.append(" WINDOW ");
            self.inject_join(&core.windows, collector, ", ");
        }
    }

    pub(crate) fn insert_statement(&self, statement: &InsertStatement, collector: &mut Collector) {
        collector.append("INSERT INTO ");

        if let Some(relation) = &statement.relation {
            self.table(relation, collector);
        }

        if !statement.columns.is_empty() {
            let quoted: Vec<String> = statement
                .columns
                .iter()
                .map(|column| self.quote_column_name(column))
                .collect();
            collector.append(&format!(" ({})", quoted.join(", ")));
        }

        if statement.values.is_some() {
            self.maybe_visit(statement.values.as_ref(), collector);
        } else {
            self.maybe_visit(statement.select.as_ref(), collector);
        }
    }

    pub(crate) fn join_source(&self, source: &JoinSource, collector: &mut Collector) {
        if let Some(left) = &source.left {
            self.visit(left, collector);
        }

        if !source.right.is_empty() {
            // No separator ahead of the first join when there is no left side.
            if source.left.is_some() {
                collector.append(" ");
            }
            for (index, join) in source.right.iter().enumerate() {
                if index > 0 {
                    collector.append(" ");
                }
                self.join(join, collector);
            }
        }
    }

    pub(crate) fn join(&self, join: &Join, collector: &mut Collector) {
        let keyword = match join.kind {
            JoinKind::Inner => "INNER JOIN ",
            JoinKind::Outer => "LEFT OUTER JOIN ",
            JoinKind::FullOuter => "FULL OUTER JOIN ",
            JoinKind::RightOuter => "RIGHT OUTER JOIN ",
            // A string join is raw SQL for the whole clause.
            JoinKind::StringJoin => {
                self.visit(&join.left, collector);
                return;
            }
        };

        collector.append(keyword);
        self.visit(&join.left, collector);

        if let Some(constraint) = &join.right {
            collector.append(" ");
            self.visit(constraint, collector);
        }
    }

    pub(crate) fn on(&self, on: &On, collector: &mut Collector) {
        collector.append("ON ");
        self.visit(&on.expr, collector);
    }

    pub(crate) fn table(&self, table: &Table, collector: &mut Collector) {
        match &table.alias {
            Some(alias) if !alias.is_empty() => {
                collector.append(&format!(
                    "{} {}",
                    self.quote_table_name(&table.name),
                    self.quote_table_name(alias)
                ));
            }
            _ => collector.append(&self.quote_table_name(&table.name)),
        }
    }

    pub(crate) fn sql_literal(&self, literal: &SqlLiteral, collector: &mut Collector) {
        collector.append(&literal.0);
    }

    pub(crate) fn distinct(&self, collector: &mut Collector) {
        collector.append("DISTINCT");
    }

    pub(crate) fn top(&self, top: &Top, collector: &mut Collector) {
        collector.append("TOP ");
        if let Some(expr) = &top.expr {
            self.visit(expr, collector);
        }
    }

    pub(crate) fn limit(&self, limit: &Limit, collector: &mut Collector) {
        collector.append("LIMIT ");
        if let Some(expr) = &limit.expr {
            self.visit(expr, collector);
        }
    }

    pub(crate) fn offset(&self, offset: &Offset, collector: &mut Collector) {
        collector.append("OFFSET ");
        if let Some(expr) = &offset.expr {
            self.visit(expr, collector);
        }
    }

    pub(crate) fn lock(&self, lock: &Lock, collector: &mut Collector) {
        // The lock expression carries its own text, e.g. FOR UPDATE.
        if let Some(expr) = &lock.expr {
            self.visit(expr, collector);
        }
    }

    pub(crate) fn with(&self, with: &With, collector: &mut Collector) {
        collector.append("WITH ");
        if let Some(expr) = &with.expr {
            self.visit(expr, collector);
        }
    }

    pub(crate) fn integer(&self, value: i64, collector: &mut Collector) {
        collector.append(&value.to_string());
    }

    /// Space-then-value when present, nothing at all when absent.
    fn maybe_visit(&self, node: Option<&Node>, collector: &mut Collector) {
        if let Some(node) = node {
            collector.append(" ");
            self.visit(node, collector);
        }
    }

    fn inject_join(&self, nodes: &[Node], collector: &mut Collector, separator: &str) {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                collector.append(separator);
            }
            self.visit(node, collector);
        }
    }

    fn quote_column_name(&self, name: &str) -> String {
        self.connection.quote_column_name(name)
    }

    fn quote_table_name(&self, name: &str) -> String {
        self.connection.quote_table_name(name)
    }
}

impl Visitor for ToSql<'_> {
    fn visit(&self, node: &Node, collector: &mut Collector) {
        dispatch::resolve(node.kind())(self, node, collector);
    }

    fn visit_select_statement(&self, statement: &SelectStatement, collector: &mut Collector) {
        self.select_statement(statement, collector);
    }

    fn visit_insert_statement(&self, statement: &InsertStatement, collector: &mut Collector) {
        self.insert_statement(statement, collector);
    }
}
