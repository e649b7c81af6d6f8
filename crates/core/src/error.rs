use thiserror::Error;

/// Errors surfaced by the content collaborators.
///
/// The inline renderer itself is total over all inputs and never fails;
/// these errors belong to the lookup and decoding boundary around it.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No record carries the requested slug.
    #[error("no content record for slug '{slug}'")]
    SlugNotFound {
        /// The slug that missed.
        slug: String,
    },
    /// A content document failed to decode.
    #[error("content decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// A path matched nothing in the route table.
    #[error("no route matches path '{path}'")]
    UnknownRoute {
        /// The unmatched path.
        path: String,
    },
}

impl ContentError {
    /// Creates a slug-miss error.
    pub fn slug_not_found(slug: impl Into<String>) -> Self {
        Self::SlugNotFound { slug: slug.into() }
    }

    /// Creates a route-miss error.
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }
}
