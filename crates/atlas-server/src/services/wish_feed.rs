//! Wish feed - random sampling of community wishes and likes

use crate::error::StorageError;
use crate::storage::Database;
use atlas_types::{LikeResult, WishEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Uniform random sample of at most `limit` wishes, in random order.
///
/// The caller supplies the RNG; pass a seeded one for a reproducible feed.
pub fn sample_wishes<R: Rng + ?Sized>(
    mut wishes: Vec<WishEntry>,
    limit: usize,
    rng: &mut R,
) -> Vec<WishEntry> {
    wishes.shuffle(rng);
    wishes.truncate(limit);
    wishes
}

pub struct WishFeed {
    db: Arc<Database>,
    limit: usize,
}

impl WishFeed {
    pub fn new(db: Arc<Database>, limit: usize) -> Self {
        Self { db, limit }
    }

    /// Fresh unseeded sample on every call
    pub async fn sample(&self) -> Result<Vec<WishEntry>, StorageError> {
        let wishes = self.db.list_wishes().await?;
        debug!("Sampling {} of {} wishes", self.limit, wishes.len());

        Ok(sample_wishes(wishes, self.limit, &mut rand::thread_rng()))
    }

    pub async fn like(&self, id: &str) -> Result<LikeResult, StorageError> {
        let result = self.db.increment_likes(id).await?;
        debug!("Wish {} now has {} likes", result.id, result.likes);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::db::tests::{submission, temp_database};
    use atlas_types::WISH_FEED_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn wishes(count: usize) -> Vec<WishEntry> {
        (0..count)
            .map(|i| WishEntry {
                id: format!("w{}", i),
                atlas_wish: format!("wish {}", i),
                name: format!("player {}", i),
                likes: 0,
            })
            .collect()
    }

    #[test]
    fn test_sample_caps_at_limit_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_wishes(wishes(12), WISH_FEED_SIZE, &mut rng);

        assert_eq!(sample.len(), WISH_FEED_SIZE);
        let ids: HashSet<_> = sample.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids.len(), WISH_FEED_SIZE);
    }

    #[test]
    fn test_sample_keeps_everything_below_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_wishes(wishes(3), WISH_FEED_SIZE, &mut rng);

        let mut ids: Vec<_> = sample.into_iter().map(|w| w.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["w0", "w1", "w2"]);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let first = sample_wishes(wishes(20), 5, &mut StdRng::seed_from_u64(42));
        let second = sample_wishes(wishes(20), 5, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_of_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_wishes(Vec::new(), 5, &mut rng).is_empty());
    }

    #[tokio::test]
    async fn test_feed_never_exceeds_limit() {
        let (_dir, db) = temp_database().await;
        let db = Arc::new(db);
        for i in 0..8 {
            db.insert_resolution(&submission(&format!("p{}", i), "hope"))
                .await
                .unwrap();
        }
        db.insert_resolution(&submission("silent", "")).await.unwrap();

        let feed = WishFeed::new(db, WISH_FEED_SIZE);
        for _ in 0..10 {
            let sample = feed.sample().await.unwrap();
            assert_eq!(sample.len(), WISH_FEED_SIZE);
            assert!(sample.iter().all(|w| w.name != "silent"));
        }
    }

    #[tokio::test]
    async fn test_like_twice() {
        let (_dir, db) = temp_database().await;
        let db = Arc::new(db);
        let created = db.insert_resolution(&submission("JESS_P", "W")).await.unwrap();
        let feed = WishFeed::new(db, WISH_FEED_SIZE);

        feed.like(&created.id).await.unwrap();
        let result = feed.like(&created.id).await.unwrap();

        assert_eq!(result.likes, 2);
    }
}
