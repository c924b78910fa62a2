use std::fmt;

/// Errors returned by queries that need at least one value in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The tree holds no values so the given query has no answer.
    #[error("tree is empty, failed to get the {0} value")]
    EmptyTree(Query),
}

/// The query that failed with [`Error::EmptyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// [`Tree::min`](crate::Tree::min)
    Min,
    /// [`Tree::max`](crate::Tree::max)
    Max,
    /// [`Tree::predecessor_of`](crate::Tree::predecessor_of)
    Predecessor,
    /// [`Tree::successor_of`](crate::Tree::successor_of)
    Successor,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Predecessor => "predecessor",
            Self::Successor => "successor",
        })
    }
}

/// Shorthand for results of fallible tree queries.
pub type Result<T> = std::result::Result<T, Error>;
