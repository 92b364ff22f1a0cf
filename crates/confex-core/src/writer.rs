//! Append-only text buffer with a side channel for diagnostics.

use serde::Serialize;

/// Final output of one example file: the rendered text and the diagnostics
/// recorded while writing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedExample {
    pub content: String,
    pub errors: Vec<String>,
}

/// Accumulates rendered text and diagnostics for a single file.
///
/// Contents are only reachable through [`OptionWriter::finish`] or
/// [`OptionWriter::scoped`], once writing is complete.
#[derive(Debug, Default)]
pub struct OptionWriter {
    buffer: String,
    errors: Vec<String>,
}

impl OptionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against a fresh writer and return its output if `f` succeeds.
    ///
    /// On error the partially written buffer is dropped.
    pub fn scoped<E, F>(f: F) -> Result<RenderedExample, E>
    where
        F: FnOnce(&mut OptionWriter) -> Result<(), E>,
    {
        let mut writer = Self::new();
        f(&mut writer)?;
        Ok(writer.finish())
    }

    /// Append fragments in order.
    pub fn write(&mut self, fragments: &[&str]) {
        for fragment in fragments {
            self.buffer.push_str(fragment);
        }
    }

    pub fn new_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Diagnostics recorded so far, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn finish(self) -> RenderedExample {
        RenderedExample {
            content: self.buffer,
            errors: self.errors,
        }
    }
}
