//! Resolution board - records submissions and lists participants

use crate::error::StorageError;
use crate::storage::Database;
use atlas_types::{Character, NewResolution, Resolution, ResolutionSummary};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResolutionBoard {
    db: Arc<Database>,
}

impl ResolutionBoard {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn submit(&self, new: NewResolution) -> Result<Resolution, StorageError> {
        match new.character.and_then(Character::find) {
            Some(character) => debug!("Saving resolution for {:?} as {}", new.name, character),
            None => debug!(
                "Saving resolution for {:?} with unlisted character {:?}",
                new.name, new.character
            ),
        }

        let resolution = self.db.insert_resolution(&new).await?;
        info!("Saved resolution {}", resolution.id);

        Ok(resolution)
    }

    /// All participants, newest first
    pub async fn participants(&self) -> Result<Vec<ResolutionSummary>, StorageError> {
        self.db.list_resolutions().await
    }
}
