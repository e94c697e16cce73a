//! Static dispatch table mapping node kinds to compilation routines.
//!
//! The table is resolved at compile time and the match is exhaustive over
//! [`NodeKind`], so an unhandled node kind is a build failure rather than a
//! runtime one. Resolution does not depend on the visitor instance or on
//! visit order.

use crate::ast::{Node, NodeKind};
use crate::collector::Collector;

use super::to_sql::ToSql;

/// A compilation routine for one node kind.
pub type VisitFn = fn(&ToSql<'_>, &Node, &mut Collector);

/// Look up the routine for `kind`.
pub fn resolve(kind: NodeKind) -> VisitFn {
    match kind {
        NodeKind::SelectStatement => select_statement,
        NodeKind::InsertStatement => insert_statement,
        NodeKind::SelectCore => select_core,
        NodeKind::JoinSource => join_source,
        NodeKind::Join => join,
        NodeKind::On => on,
        NodeKind::Table => table,
        NodeKind::SqlLiteral => sql_literal,
        NodeKind::Distinct => distinct,
        NodeKind::Top => top,
        NodeKind::Limit => limit,
        NodeKind::Offset => offset,
        NodeKind::Lock => lock,
        NodeKind::With => with,
        NodeKind::Integer => integer,
    }
}

fn select_statement(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::SelectStatement(statement) = node {
        visitor.select_statement(statement, collector);
    }
}

fn insert_statement(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::InsertStatement(statement) = node {
        visitor.insert_statement(statement, collector);
    }
}

fn select_core(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::SelectCore(core) = node {
        visitor.select_core(core, collector);
    }
}

fn join_source(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::JoinSource(source) = node {
        visitor.join_source(source, collector);
    }
}

fn join(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Join(join) = node {
        visitor.join(join, collector);
    }
}

fn on(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::On(on) = node {
        visitor.on(on, collector);
    }
}

fn table(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Table(table) = node {
        visitor.table(table, collector);
    }
}

fn sql_literal(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::SqlLiteral(literal) = node {
        visitor.sql_literal(literal, collector);
    }
}

fn distinct(visitor: &ToSql<'_>, _node: &Node, collector: &mut Collector) {
    visitor.distinct(collector);
}

fn top(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Top(top) = node {
        visitor.top(top, collector);
    }
}

fn limit(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Limit(limit) = node {
        visitor.limit(limit, collector);
    }
}

fn offset(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Offset(offset) = node {
        visitor.offset(offset, collector);
    }
}

fn lock(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Lock(lock) = node {
        visitor.lock(lock, collector);
    }
}

fn with(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::With(with) = node {
        visitor.with(with, collector);
    }
}

fn integer(visitor: &ToSql<'_>, node: &Node, collector: &mut Collector) {
    if let Node::Integer(value) = node {
        visitor.integer(*value, collector);
    }
}
