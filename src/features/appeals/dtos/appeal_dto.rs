use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request DTO for submitting an appeal
///
/// Every field is optional at the deserialization level so that a missing
/// value is reported next to the other violations instead of failing the
/// whole body. Dates arrive as ISO-8601 strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppealDto {
    /// Surname in Cyrillic, starting with a capital letter
    #[schema(example = "Иванов")]
    pub last_name: Option<String>,

    /// Given name in Cyrillic, starting with a capital letter
    #[schema(example = "Пётр")]
    pub first_name: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[schema(example = "1990-05-15")]
    pub birth_date: Option<String>,

    /// Phone number in the +7XXXXXXXXXX format
    #[schema(example = "+79991234567")]
    pub phone: Option<String>,

    #[schema(example = "ivanov@example.com")]
    pub email: Option<String>,

    /// Reason codes (NO_NETWORK, PHONE_NOT_WORKING, NO_EMAILS) or their labels
    #[schema(example = json!(["NO_NETWORK", "NO_EMAILS"]))]
    pub reasons: Option<Vec<String>>,

    /// When the problem was noticed (YYYY-MM-DDTHH:MM:SS, offset optional)
    #[schema(example = "2025-01-15T14:30:00")]
    pub issue_discovered_at: Option<String>,
}

/// Response DTO for an accepted appeal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppealCreatedDto {
    pub appeal_id: Uuid,
}
