//! Wish feed types

use serde::{Deserialize, Serialize};

/// Maximum number of wishes returned by one feed request
pub const WISH_FEED_SIZE: usize = 5;

/// A wish as shown in the community feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishEntry {
    pub id: String,
    pub atlas_wish: String,
    pub name: String,
    pub likes: i64,
}

/// Body for `POST /wishes/like`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
    pub id: String,
}

/// Counter state after a like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResult {
    pub id: String,
    pub likes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wish_entry_keys() {
        let entry = WishEntry {
            id: "w1".to_string(),
            atlas_wish: "more sleep".to_string(),
            name: "JESS_P".to_string(),
            likes: 4,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "w1",
                "atlasWish": "more sleep",
                "name": "JESS_P",
                "likes": 4
            })
        );
    }
}
