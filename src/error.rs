use std::fmt;

/// Represents errors that can occur when registering a new route.
///
/// Registration is the only fallible operation in this crate: a URL that
/// matches nothing is a normal [`None`](crate::Router::resolve) outcome,
/// never an error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// Attempted to insert an empty route string.
    Empty,
    /// Placeholders must be registered with a name.
    ///
    /// ```
    /// use beckon::{InsertError, Router};
    ///
    /// let mut router = Router::new("app");
    /// assert_eq!(router.insert("user:{}"), Err(InsertError::UnnamedParam));
    /// ```
    UnnamedParam,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "routes must not be empty"),
            Self::UnnamedParam => write!(f, "placeholders must be registered with a name"),
        }
    }
}

impl std::error::Error for InsertError {}
