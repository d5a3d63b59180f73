use thiserror::Error;

/// Failure raised by a graph gateway call.
///
/// Decoding of the `history` payload is not part of this: a bad payload is
/// still a well-formed record, and callers decide what to do with it.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("graph query failed: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("unexpected record shape: {0}")]
    Record(#[from] neo4rs::DeError),
}

pub type RepoResult<T> = Result<T, RepoError>;
