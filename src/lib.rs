//! Build SQL statements as typed query trees, compiled to text through a visitor.
//!
//! A statement is assembled by a tree manager ([`SelectManager`],
//! [`InsertManager`]) that owns exactly one statement root. Compilation walks
//! the tree with a [`ToSql`] visitor backed by a [`Connection`] that supplies
//! identifier quoting, accumulating the output in a [`Collector`].
//!
//! ```
//! use arbor::{Connection, Engine, SelectManager, Table, TreeManager};
//!
//! struct DoubleQuoting;
//!
//! impl Connection for DoubleQuoting {
//!     fn quote_column_name(&self, name: &str) -> String {
//!         format!("\"{}\"", name)
//!     }
//!     fn quote_table_name(&self, name: &str) -> String {
//!         format!("\"{}\"", name)
//!     }
//! }
//!
//! let engine = Engine::new(DoubleQuoting);
//! let sql = SelectManager::new()
//!     .project("id")
//!     .from(Table::new("users"))
//!     .to_sql(&engine);
//! assert_eq!(sql, "SELECT id FROM \"users\"");
//! ```

pub mod ast;
pub mod collector;
pub mod connection;
pub mod manager;
pub mod visitor;

pub use ast::{Join, JoinKind, Node, NodeKind, SqlLiteral, Table};
pub use collector::Collector;
pub use connection::{Connection, Engine};
pub use manager::{InsertManager, SelectManager, TreeManager};
pub use visitor::{ToSql, Visitor};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::collector::Collector;
    pub use crate::connection::{Connection, Engine};
    pub use crate::manager::{InsertManager, SelectManager, TreeManager};
    pub use crate::visitor::{ToSql, Visitor};
}
