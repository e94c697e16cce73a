//! Tree-walking SQL compilation.

mod dispatch;
mod to_sql;

pub use dispatch::{VisitFn, resolve};
pub use to_sql::ToSql;

use crate::ast::{InsertStatement, Node, SelectStatement};
use crate::collector::Collector;

/// Compiles query trees by dispatching on each node's concrete kind.
///
/// Statement roots enter through the typed methods so managers can compile
/// the statement they own without wrapping it in a [`Node`] first.
pub trait Visitor {
    /// Append the compiled form of `node` into `collector` (the threaded
    /// form used during recursive descent).
    fn visit(&self, node: &Node, collector: &mut Collector);

    /// Entry point for a SELECT statement root.
    fn visit_select_statement(&self, statement: &SelectStatement, collector: &mut Collector);

    /// Entry point for an INSERT statement root.
    fn visit_insert_statement(&self, statement: &InsertStatement, collector: &mut Collector);

    /// Compile `node` into a fresh collector.
    fn accept(&self, node: &Node) -> Collector {
        let mut collector = Collector::new();
        self.visit(node, &mut collector);
        collector
    }
}
