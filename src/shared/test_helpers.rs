#[cfg(test)]
use chrono::{NaiveDate, NaiveDateTime};

#[cfg(test)]
use crate::features::appeals::dtos::CreateAppealDto;

/// Fixed "now" used by time-dependent tests: 2025-06-01 12:00:00
#[cfg(test)]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A submission passing every rule at [`fixed_now`]
#[cfg(test)]
pub fn valid_appeal_dto() -> CreateAppealDto {
    CreateAppealDto {
        last_name: Some("Иванов".to_string()),
        first_name: Some("Пётр".to_string()),
        birth_date: Some("1990-05-15".to_string()),
        phone: Some("+79991234567".to_string()),
        email: Some("ivanov@example.com".to_string()),
        reasons: Some(vec!["NO_NETWORK".to_string(), "NO_EMAILS".to_string()]),
        issue_discovered_at: Some("2025-01-15T14:30:00".to_string()),
    }
}
