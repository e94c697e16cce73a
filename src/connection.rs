//! Quoting capability consumed from the database adapter.

use crate::visitor::ToSql;

/// Identifier quoting rules supplied by an adapter.
///
/// The compiler routes every table and column name through these unless the
/// identifier entered the tree as a [`SqlLiteral`](crate::SqlLiteral), which
/// is emitted verbatim.
pub trait Connection {
    fn quote_column_name(&self, name: &str) -> String;

    fn quote_table_name(&self, name: &str) -> String;
}

/// One wired connection/visitor pair.
///
/// Constructed once at application wiring time and passed explicitly to
/// `to_sql`; there is no process-wide default.
pub struct Engine {
    connection: Box<dyn Connection>,
}

impl Engine {
    pub fn new(connection: impl Connection + 'static) -> Self {
        Self {
            connection: Box::new(connection),
        }
    }

    pub fn connection(&self) -> &dyn Connection {
        self.connection.as_ref()
    }

    /// The SQL compiler bound to this engine's connection.
    pub fn visitor(&self) -> ToSql<'_> {
        ToSql::new(self.connection.as_ref())
    }
}
