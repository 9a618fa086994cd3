/// Errors raised while registering route patterns or resolving redirects
///
/// An unrecognized path is not an error: resolution returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// A path fragment could not be turned into matcher segments
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A redirect target leads back to a path already visited during the same resolution
    #[error("redirect cycle starting at `{from}`: {}", .chain.join(" -> "))]
    RedirectCycle { from: String, chain: Vec<String> },

    /// More redirect hops than the configured limit
    #[error("more than {limit} redirects while resolving `{from}`")]
    RedirectLimit { from: String, limit: usize },
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
