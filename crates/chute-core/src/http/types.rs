use crate::http::errors::FetchError;

/// Result of one fetch as seen by a projection.
///
/// Failures carry no detail: every kind of fetch error is displayed the
/// same way.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure,
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(doc) => FetchOutcome::Success(doc),
            Err(_) => FetchOutcome::Failure,
        }
    }
}
