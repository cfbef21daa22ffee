use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Complaint category a subscriber can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueReason {
    NoNetwork,
    PhoneNotWorking,
    NoEmails,
}

impl IssueReason {
    pub const ALL: [IssueReason; 3] = [
        IssueReason::NoNetwork,
        IssueReason::PhoneNotWorking,
        IssueReason::NoEmails,
    ];

    /// Machine code used on the wire and in stored files
    pub fn code(&self) -> &'static str {
        match self {
            IssueReason::NoNetwork => "NO_NETWORK",
            IssueReason::PhoneNotWorking => "PHONE_NOT_WORKING",
            IssueReason::NoEmails => "NO_EMAILS",
        }
    }

    /// Human-readable label shown to subscribers
    pub fn label(&self) -> &'static str {
        match self {
            IssueReason::NoNetwork => "нет доступа к сети",
            IssueReason::PhoneNotWorking => "не работает телефон",
            IssueReason::NoEmails => "не приходят письма",
        }
    }
}

impl std::fmt::Display for IssueReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string names no known reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIssueReason(pub String);

impl FromStr for IssueReason {
    type Err = UnknownIssueReason;

    /// Accepts either the code (`NO_NETWORK`) or the subscriber-facing label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueReason::ALL
            .into_iter()
            .find(|reason| reason.code() == s || reason.label() == s)
            .ok_or_else(|| UnknownIssueReason(s.to_string()))
    }
}

/// A validated subscriber appeal, not yet identified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
    pub last_name: String,
    pub first_name: String,
    #[schema(example = "1990-05-15")]
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub reasons: Vec<IssueReason>,
    #[schema(example = "2025-01-15T14:30:00")]
    pub issue_discovered_at: NaiveDateTime,
}

/// An accepted appeal together with its assigned identifier, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAppeal {
    pub id: Uuid,
    #[serde(flatten)]
    pub appeal: Appeal,
}
