//! Results reported by mutating store operations.

/// What happened to a mutation's durable write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Applied in memory and persisted.
    Saved,
    /// Applied in memory, persistence failed, in-memory state restored.
    RolledBack,
    /// The target did not exist; nothing was applied or written.
    Unchanged,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    pub fn is_rolled_back(&self) -> bool {
        matches!(self, SaveOutcome::RolledBack)
    }
}

/// A value produced by a mutation together with its [`SaveOutcome`].
///
/// The value is returned even when the write was rolled back, so callers
/// that only care about the optimistic result can ignore the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub outcome: SaveOutcome,
}

impl<T> Mutation<T> {
    pub(crate) fn new(value: T, outcome: SaveOutcome) -> Self {
        Self { value, outcome }
    }

    /// Maps the carried value, keeping the outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Mutation<U> {
        Mutation {
            value: f(self.value),
            outcome: self.outcome,
        }
    }
}
