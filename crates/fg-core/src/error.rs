use thiserror::Error;

pub type DagResult<T> = Result<T, DagError>;

/// Every way building or querying a dataflow graph can fail.
///
/// Failures are reported at the offending call and leave prior state intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError {
    #[error("Duplicate name: {name} already exists in {scope}")]
    DuplicateName { name: String, scope: String },

    #[error("Not found: {what} '{name}'")]
    NotFound { what: &'static str, name: String },

    #[error("Index out of range: {what} (index={index}, len={len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Direction mismatch: cannot connect {a} with {b}")]
    DirectionMismatch { a: String, b: String },

    #[error("Ambiguous port: transform '{transform}' has {count} {direction} ports (expected 1)")]
    AmbiguousPort {
        transform: String,
        direction: &'static str,
        count: usize,
    },

    #[error("Dangling reference: {what} is not owned by a transform in graph '{graph}'")]
    DanglingReference { what: String, graph: String },

    #[error("Unbound value: constant '{name}' ({reason})")]
    UnboundValue { name: String, reason: &'static str },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

/// Reject empty or whitespace-padded identifiers.
pub fn ensure_name(name: &str) -> DagResult<()> {
    if name.is_empty() {
        return Err(DagError::InvalidName {
            name: name.to_string(),
            reason: "name is empty",
        });
    }
    if name.trim() != name {
        return Err(DagError::InvalidName {
            name: name.to_string(),
            reason: "name has leading or trailing whitespace",
        });
    }
    Ok(())
}
