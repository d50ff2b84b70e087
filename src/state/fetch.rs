//! View Fetch State
//!
//! Every page owns one fetch and drives it through this state machine:
//! it starts in `Loading` on mount and transitions exactly once per
//! activation, to `Ready` or `Failed`. There is no retry or timeout; a
//! re-navigation starts a fresh fetch.

/// Lifecycle of a page's single fetch
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(reason) => FetchState::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_maps_onto_state() {
        let ok: FetchState<Vec<u32>> = Ok(vec![1, 2]).into();
        assert_eq!(ok, FetchState::Ready(vec![1, 2]));

        let err: FetchState<Vec<u32>> = Err("HTTP error: status 500".to_string()).into();
        assert_eq!(err, FetchState::Failed("HTTP error: status 500".to_string()));
    }
}
