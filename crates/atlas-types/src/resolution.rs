//! Resolution types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of yearly objectives a resolution carries
pub const OBJECTIVE_COUNT: usize = 3;

/// Ordered objectives. A slot is `None` when the form omitted it.
pub type Objectives = [Option<String>; OBJECTIVE_COUNT];

/// A stored resolution, as returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub id: String,
    pub name: String,
    pub character: i64,
    pub objectives: Objectives,
    pub atlas_wish: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Listing projection of a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub id: String,
    pub name: String,
    pub character: i64,
    pub created_at: DateTime<Utc>,
}

/// The three objective fields of a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveFields {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

/// Form submission body for `POST /resolutions`.
///
/// Nothing here is validated: absent fields are carried through to the
/// store, which decides whether the row is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResolutionRequest {
    pub name: Option<String>,
    pub character: Option<i64>,
    pub resolutions: ObjectiveFields,
    /// Free-text wish shown in the community feed
    pub requirements: Option<String>,
}

/// Row to insert into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResolution {
    pub name: Option<String>,
    pub character: Option<i64>,
    pub objectives: Objectives,
    pub atlas_wish: Option<String>,
}

impl From<CreateResolutionRequest> for NewResolution {
    fn from(req: CreateResolutionRequest) -> Self {
        let ObjectiveFields {
            first,
            second,
            third,
        } = req.resolutions;

        NewResolution {
            name: req.name,
            character: req.character,
            objectives: [first, second, third],
            atlas_wish: req.requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_objectives_in_order() {
        let req: CreateResolutionRequest = serde_json::from_str(
            r#"{
                "name": "ALEX_84",
                "character": 2,
                "resolutions": {"first": "A", "second": "B", "third": "C"},
                "requirements": "W"
            }"#,
        )
        .unwrap();

        let new: NewResolution = req.into();
        assert_eq!(new.name.as_deref(), Some("ALEX_84"));
        assert_eq!(new.character, Some(2));
        assert_eq!(
            new.objectives,
            [Some("A".to_string()), Some("B".to_string()), Some("C".to_string())]
        );
        assert_eq!(new.atlas_wish.as_deref(), Some("W"));
    }

    #[test]
    fn test_missing_objective_stays_empty() {
        let req: CreateResolutionRequest = serde_json::from_str(
            r#"{"name": "x", "character": 1, "resolutions": {"first": "A", "third": "C"}}"#,
        )
        .unwrap();

        let new: NewResolution = req.into();
        assert_eq!(new.objectives[1], None);
        assert_eq!(new.atlas_wish, None);
    }

    #[test]
    fn test_resolution_uses_camel_case_keys() {
        let resolution = Resolution {
            id: "r1".to_string(),
            name: "SARA.K".to_string(),
            character: 3,
            objectives: [Some("run".to_string()), None, Some("read".to_string())],
            atlas_wish: "peace".to_string(),
            likes: 0,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&resolution).unwrap();
        assert_eq!(value["atlasWish"], "peace");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["objectives"][1], serde_json::Value::Null);
        assert_eq!(value["objectives"].as_array().map(|a| a.len()), Some(3));
    }
}
