//! Reading repository trait

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::Reading;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Storage contract for issued readings.
///
/// Readings are append-only; the engine never updates or deletes them. The
/// two lookups are both "most recent first" queries keyed by
/// `(user_id, issued_at)`.
#[async_trait]
pub trait ReadingRepository: Send + Sync + Debug {
    /// Most recent reading for the user with `issued_at >= since`, if any
    async fn latest_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Option<Reading>, DomainError>;

    /// Most recent reading for the user over all time, if any
    async fn latest(&self, user_id: &UserId) -> Result<Option<Reading>, DomainError>;

    /// Persist a newly issued reading
    async fn insert(&self, reading: Reading) -> Result<Reading, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock reading repository for testing
    #[derive(Debug, Default)]
    pub struct MockReadingRepository {
        readings: Arc<RwLock<Vec<Reading>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockReadingRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make all operations fail with a storage error
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of stored readings
        pub async fn count(&self) -> usize {
            self.readings.read().await.len()
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ReadingRepository for MockReadingRepository {
        async fn latest_since(
            &self,
            user_id: &UserId,
            since: DateTime<Utc>,
        ) -> Result<Option<Reading>, DomainError> {
            self.check_should_fail().await?;
            let readings = self.readings.read().await;

            Ok(readings
                .iter()
                .filter(|r| r.user_id() == user_id && r.issued_at() >= since)
                .max_by_key(|r| r.issued_at())
                .cloned())
        }

        async fn latest(&self, user_id: &UserId) -> Result<Option<Reading>, DomainError> {
            self.check_should_fail().await?;
            let readings = self.readings.read().await;

            Ok(readings
                .iter()
                .filter(|r| r.user_id() == user_id)
                .max_by_key(|r| r.issued_at())
                .cloned())
        }

        async fn insert(&self, reading: Reading) -> Result<Reading, DomainError> {
            self.check_should_fail().await?;
            let mut readings = self.readings.write().await;
            readings.push(reading.clone());
            Ok(reading)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::card::CardId;
        use crate::domain::reading::ReadingCard;
        use crate::domain::user::Tier;
        use chrono::Duration;

        fn reading_at(user: &UserId, card_id: u32, at: DateTime<Utc>) -> Reading {
            let card = ReadingCard::new(
                CardId::new(card_id).unwrap(),
                "TITULO",
                "desc",
                None,
                "",
                "/img.png",
            );
            Reading::new(user.clone(), card, at, Tier::Free)
        }

        #[tokio::test]
        async fn test_latest_since_filters_by_window() {
            let repo = MockReadingRepository::new();
            let user = UserId::new("alice").unwrap();
            let now = Utc::now();

            repo.insert(reading_at(&user, 1, now - Duration::days(5)))
                .await
                .unwrap();
            let recent = repo.insert(reading_at(&user, 2, now - Duration::hours(1))).await.unwrap();

            let found = repo
                .latest_since(&user, now - Duration::days(3))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.id(), recent.id());

            let none = repo.latest_since(&user, now).await.unwrap();
            assert!(none.is_none());
        }

        #[tokio::test]
        async fn test_latest_returns_most_recent() {
            let repo = MockReadingRepository::new();
            let user = UserId::new("alice").unwrap();
            let other = UserId::new("bob").unwrap();
            let now = Utc::now();

            repo.insert(reading_at(&user, 1, now - Duration::days(2)))
                .await
                .unwrap();
            let newest = repo.insert(reading_at(&user, 2, now)).await.unwrap();
            repo.insert(reading_at(&other, 3, now)).await.unwrap();

            let found = repo.latest(&user).await.unwrap().unwrap();
            assert_eq!(found.id(), newest.id());
            assert_eq!(found.card().card_id().value(), 2);
        }

        #[tokio::test]
        async fn test_failure_injection() {
            let repo = MockReadingRepository::new();
            let user = UserId::new("alice").unwrap();

            repo.set_should_fail(true).await;
            assert!(repo.latest(&user).await.is_err());
        }
    }
}
