//! Shared fixtures for integration tests.

use arbor::{Connection, Engine};

/// Wraps identifiers in double quotes, like the SQLite adapter does.
pub struct FakeConnection;

impl Connection for FakeConnection {
    fn quote_column_name(&self, name: &str) -> String {
        format!("\"{}\"", name)
    }

    fn quote_table_name(&self, name: &str) -> String {
        format!("\"{}\"", name)
    }
}

pub fn engine() -> Engine {
    Engine::new(FakeConnection)
}
