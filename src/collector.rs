//! Append-only accumulator for compiled SQL text.

/// Owns the output buffer threaded through one compilation pass.
///
/// A fresh collector is created per `to_sql` call, appended to during the
/// tree walk, and read once at the end.
#[derive(Debug, Default)]
pub struct Collector {
    value: String,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: &str) {
        self.value.push_str(fragment);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
