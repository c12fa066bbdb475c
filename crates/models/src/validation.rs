//! Accumulates field violations so a create can report all of them at once.

use crate::errors::ModelError;

#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self { Self::default() }

    /// Keep the value on success, record the message on failure.
    pub fn check<T>(&mut self, res: Result<T, ModelError>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(e) => {
                self.0.push(e.message().to_string());
                None
            }
        }
    }

    pub fn push(&mut self, msg: impl Into<String>) { self.0.push(msg.into()); }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// `Ok` when nothing was recorded, otherwise one `Validation` joined with `"; "`.
    pub fn finish(self) -> Result<(), ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self.0.join("; ")))
        }
    }
}

/// Present and not only whitespace.
pub fn require_text(value: Option<&str>, missing: &str) -> Result<String, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ModelError::validation(missing)),
    }
}
