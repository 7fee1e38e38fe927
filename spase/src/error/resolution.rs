//! ResolutionFailure for geometry queries against an environment

/// Error raised while querying an element's geometry.
///
/// The resolving operations in this crate come in two flavours: `try_*`
/// variants surface this error, the plain variants log it and degrade to
/// an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionFailure {
    /// The environment has no geometry for the node.
    #[error("Element '{node}' is not attached")]
    Detached { node: String },

    /// Any other failure reported by the environment.
    #[error("Geometry query failed: {message}")]
    Query { message: String },
}

impl ResolutionFailure {
    /// Creates a new detached node error.
    pub fn detached(node: impl Into<String>) -> Self {
        Self::Detached { node: node.into() }
    }

    /// Creates a new query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
