//! Errors reported by the ordered collections.

use std::result;
use thiserror::Error;

/// Failures of map and set operations.
///
/// Inserting a key that already exists is not an error; `insert` reports it through its returned
/// flag instead.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A lookup that may not insert did not find the key.
    #[error("key not found")]
    KeyNotFound,
    /// A removal was attempted on an empty container.
    #[error("invalid operation on empty container")]
    EmptyContainer,
    /// A cursor argument does not refer to an entry of the container.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A structural or balance invariant of the tree does not hold.
    #[error("tree invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for results of fallible collection operations.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(
            Error::EmptyContainer.to_string(),
            "invalid operation on empty container",
        );
        assert_eq!(
            Error::InvalidArgument("end cursor").to_string(),
            "invalid argument: end cursor",
        );
        assert_eq!(
            Error::InvariantViolation(String::from("red node has red child")).to_string(),
            "tree invariant violated: red node has red child",
        );
    }
}
