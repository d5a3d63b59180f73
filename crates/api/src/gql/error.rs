use infra::error::RepoError;

/// Error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so wrapping a gateway error here is enough for `?` to work. The wrapper logs the
/// real error and shows clients a sanitized message.
#[derive(Debug)]
pub enum GqlError {
    Repo(RepoError),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Repo(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Graph database error: {e}");
                write!(f, "Internal database error")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<RepoError> for GqlError {
    fn from(e: RepoError) -> Self {
        GqlError::Repo(e)
    }
}
