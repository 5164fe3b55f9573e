/// Page state definitions for tracking build progress
///
/// This module defines the states a page moves through during one build:
/// `Fetching -> CacheCheck -> Done` on a cache hit, or
/// `Fetching -> CacheCheck -> Transforming -> Store -> Done` on a miss.
/// `Failed` is reachable from every active state.
use std::fmt;

/// Represents the current state of a page in the build pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Page body is being retrieved from the site
    Fetching,

    /// Cache is being consulted for the fetched body
    CacheCheck,

    /// Cache missed; the transformer is producing new output
    Transforming,

    /// Fresh output is being recorded in the cache
    Store,

    // ===== Terminal States =====
    /// Output was written and the page is listed in the manifest
    Done,

    /// Page could not be built; it is left out of the manifest
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if this is an active state (page may still be processed)
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if the pipeline may move from `self` to `next`
    pub fn can_transition_to(&self, next: PageState) -> bool {
        match (self, next) {
            (Self::Fetching, Self::CacheCheck) => true,
            (Self::CacheCheck, Self::Done) => true,
            (Self::CacheCheck, Self::Transforming) => true,
            (Self::Transforming, Self::Store) => true,
            (Self::Store, Self::Done) => true,
            (from, Self::Failed) => from.is_active(),
            _ => false,
        }
    }

    /// Short lowercase label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::CacheCheck => "cache_check",
            Self::Transforming => "transforming",
            Self::Store => "store",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!PageState::Fetching.is_terminal());
        assert!(!PageState::CacheCheck.is_terminal());
        assert!(!PageState::Transforming.is_terminal());
        assert!(!PageState::Store.is_terminal());

        assert!(PageState::Done.is_terminal());
        assert!(PageState::Failed.is_terminal());
    }

    #[test]
    fn test_hit_path() {
        assert!(PageState::Fetching.can_transition_to(PageState::CacheCheck));
        assert!(PageState::CacheCheck.can_transition_to(PageState::Done));
    }

    #[test]
    fn test_miss_path() {
        assert!(PageState::CacheCheck.can_transition_to(PageState::Transforming));
        assert!(PageState::Transforming.can_transition_to(PageState::Store));
        assert!(PageState::Store.can_transition_to(PageState::Done));
    }

    #[test]
    fn test_failed_reachable_from_active_states() {
        let all = [
            PageState::Fetching,
            PageState::CacheCheck,
            PageState::Transforming,
            PageState::Store,
            PageState::Done,
            PageState::Failed,
        ];
        for state in all {
            assert_eq!(
                state.can_transition_to(PageState::Failed),
                state.is_active(),
                "unexpected Failed edge from {:?}",
                state
            );
        }
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!PageState::Fetching.can_transition_to(PageState::Transforming));
        assert!(!PageState::Transforming.can_transition_to(PageState::Done));
        assert!(!PageState::CacheCheck.can_transition_to(PageState::Store));
        assert!(!PageState::Done.can_transition_to(PageState::Fetching));
        assert!(!PageState::Failed.can_transition_to(PageState::CacheCheck));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PageState::CacheCheck), "cache_check");
        assert_eq!(format!("{}", PageState::Done), "done");
    }
}
