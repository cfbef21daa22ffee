use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::appeals::dtos::{AppealCreatedDto, CreateAppealDto};
use crate::features::appeals::models::StoredAppeal;
use crate::features::appeals::validator::validate;
use crate::modules::storage::AppealStore;
use crate::shared::clock::Clock;

/// Service accepting subscriber appeals
///
/// Validates a submission, assigns it an identifier and hands it to the store.
/// Identity and persistence stay here so the validator remains a pure function.
pub struct AppealService {
    store: Arc<dyn AppealStore>,
    clock: Arc<dyn Clock>,
}

impl AppealService {
    pub fn new(store: Arc<dyn AppealStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and persist a new appeal
    pub async fn submit(&self, dto: CreateAppealDto) -> Result<AppealCreatedDto> {
        let appeal = validate(&dto, self.clock.now()).map_err(|errors| {
            tracing::warn!("Appeal rejected: {} violation(s)", errors.len());
            AppError::Validation(errors)
        })?;

        let stored = StoredAppeal {
            id: Uuid::new_v4(),
            appeal,
        };

        self.store.save(&stored).await.map_err(|e| {
            tracing::error!("Failed to store appeal {}: {:?}", stored.id, e);
            AppError::Storage(e)
        })?;

        tracing::info!(
            "Appeal accepted: id={}, reasons={:?}",
            stored.id,
            stored.appeal.reasons
        );

        Ok(AppealCreatedDto {
            appeal_id: stored.id,
        })
    }
}
