//! Fluent builders owning one statement tree each.

mod insert;
mod select;

pub use insert::InsertManager;
pub use select::SelectManager;

use crate::collector::Collector;
use crate::connection::Engine;
use crate::visitor::Visitor;

/// Shared compilation entry point for statement builders.
///
/// Compilation is read-only over the AST and uses a fresh [`Collector`] per
/// call.
pub trait TreeManager {
    /// Feed this manager's statement root to `visitor`.
    fn accept(&self, visitor: &dyn Visitor, collector: &mut Collector);

    /// Compile through the engine's bound visitor.
    fn to_sql(&self, engine: &Engine) -> String {
        self.to_sql_with(&engine.visitor())
    }

    /// Compile through an explicit visitor.
    fn to_sql_with(&self, visitor: &dyn Visitor) -> String {
        let mut collector = Collector::new();
        self.accept(visitor, &mut collector);
        collector.into_value()
    }
}
