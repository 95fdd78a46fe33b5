use std::time::Duration;
use tokio::sync::RwLock;
use crate::core::{ExchangeMatcher, MatchError};
use crate::models::SearchState;
use crate::services::registry::ResidentRegistry;

/// One caller-facing match search
///
/// Moves `Idle -> Searching -> Results | NotFound`. The registry is copied
/// when the search starts; that snapshot is the only input of the scan, so
/// upserts landing during the optional latency do not change the result.
#[derive(Debug, Default)]
pub struct MatchSearch {
    state: SearchState,
    latency: Duration,
}

impl MatchSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay applied after the snapshot is taken, before results are published
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            state: SearchState::Idle,
            latency,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub async fn run(
        &mut self,
        matcher: &ExchangeMatcher,
        registry: &RwLock<ResidentRegistry>,
        subject_id: &str,
    ) -> &SearchState {
        self.state = SearchState::Searching;

        let snapshot = registry.read().await.snapshot();

        if !self.latency.is_zero() {
            tracing::debug!("Simulating {}ms search latency", self.latency.as_millis());
            tokio::time::sleep(self.latency).await;
        }

        self.state = match matcher.find_matches(subject_id, &snapshot) {
            Ok(matches) => SearchState::Results(matches),
            Err(MatchError::SubjectNotFound(id)) => {
                tracing::info!("Match search for unknown resident {}", id);
                SearchState::NotFound
            }
        };

        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Resident, WishDirection, WishFloor};
    use std::sync::Arc;

    fn resident(id: &str, floor: i32) -> Resident {
        Resident {
            national_id: id.to_string(),
            name: format!("Resident {}", id),
            building: "9".to_string(),
            floor,
            direction: Direction::East,
            phone: String::new(),
            wish_floor: WishFloor::Any,
            wish_direction: WishDirection::Any,
        }
    }

    #[tokio::test]
    async fn test_search_reaches_results() {
        let registry: ResidentRegistry = vec![resident("a", 1), resident("b", 2)].into_iter().collect();
        let registry = RwLock::new(registry);
        let matcher = ExchangeMatcher::with_default_rules();

        let mut search = MatchSearch::new();
        assert_eq!(search.state(), &SearchState::Idle);

        search.run(&matcher, &registry, "a").await;

        match search.into_state() {
            SearchState::Results(matches) => {
                assert_eq!(matches.len(), 1);
                assert_eq!(matches[0].resident.national_id, "b");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_unknown_subject() {
        let registry = RwLock::new(ResidentRegistry::new());
        let matcher = ExchangeMatcher::with_default_rules();

        let mut search = MatchSearch::new();
        let state = search.run(&matcher, &registry, "nobody").await;

        assert_eq!(state, &SearchState::NotFound);
        assert!(state.is_terminal());
    }

    #[tokio::test]
    async fn test_snapshot_taken_before_latency() {
        let registry = ResidentRegistry::from_iter(vec![resident("a", 1)]).shared();
        let matcher = ExchangeMatcher::with_default_rules();

        let writer = Arc::clone(&registry);
        let search_registry = Arc::clone(&registry);
        let handle = tokio::spawn(async move {
            let mut search = MatchSearch::with_latency(Duration::from_millis(200));
            search.run(&matcher, &search_registry, "a").await;
            search.into_state()
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        writer.write().await.upsert(resident("late", 1));

        let state = handle.await.unwrap();
        assert_eq!(state, SearchState::Results(vec![]));
        assert_eq!(registry.read().await.len(), 2);
    }
}
