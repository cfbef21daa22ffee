//! Validation pipeline for appeal submissions.
//!
//! [`validate`] runs every field rule against a raw [`CreateAppealDto`] and
//! either returns a normalized [`Appeal`] or the complete list of
//! [`Violation`]s. Rules never short-circuit across fields, so a client gets
//! every problem in a single response. Within one field the checks run in a
//! fixed order and only the first failure is reported.
//!
//! The validator is a pure function: the current time is passed in and no
//! identifier is assigned here.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use validator::ValidateEmail;

use crate::features::appeals::dtos::CreateAppealDto;
use crate::features::appeals::models::{Appeal, IssueReason, UnknownIssueReason};
use crate::shared::types::ErrorDetail;
use crate::shared::validation::{
    first_non_cyrillic, MIN_BIRTH_YEAR, NAME_MAX_LEN, NAME_MIN_LEN, PHONE_REGEX,
};

/// Timestamp layouts accepted for `issueDiscoveredAt` when no offset is given.
/// A space or lowercase `t` separator is rewritten to `T` before matching.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Offset-carrying layouts, with and without a colon in the offset
const OFFSET_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Appeal fields, named as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealField {
    LastName,
    FirstName,
    BirthDate,
    Phone,
    Email,
    Reasons,
    IssueDiscoveredAt,
}

impl AppealField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppealField::LastName => "lastName",
            AppealField::FirstName => "firstName",
            AppealField::BirthDate => "birthDate",
            AppealField::Phone => "phone",
            AppealField::Email => "email",
            AppealField::Reasons => "reasons",
            AppealField::IssueDiscoveredAt => "issueDiscoveredAt",
        }
    }
}

impl std::fmt::Display for AppealField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("длина должна быть от {min} до {max} символов", min = NAME_MIN_LEN, max = NAME_MAX_LEN)]
    Length,

    #[error("должно начинаться с заглавной буквы")]
    NotCapitalized,

    #[error("только кириллица, найден символ '{0}'")]
    NonCyrillic(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateViolation {
    #[error("Дата рождения не может быть в будущем")]
    InFuture,

    #[error("Дата рождения не может быть ранее {year} года", year = MIN_BIRTH_YEAR)]
    BeforeMinYear,
}

/// A single field-level rule failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Обязательное поле")]
    MissingField { field: AppealField },

    #[error("Неверный формат даты")]
    MalformedDate { field: AppealField },

    #[error("{field}: {reason}")]
    InvalidName {
        field: AppealField,
        reason: NameViolation,
    },

    #[error("Формат телефона: +7XXXXXXXXXX")]
    InvalidPhone,

    #[error("Некорректный адрес электронной почты")]
    InvalidEmail,

    #[error("{reason}")]
    InvalidBirthDate { reason: BirthDateViolation },

    #[error("Дата обнаружения проблемы не может быть в будущем")]
    FutureIssueTime,

    #[error("Необходимо указать хотя бы одну причину обращения")]
    EmptyReasons,

    #[error("Неизвестная причина обращения: '{value}'")]
    UnknownReason { value: String },
}

impl Violation {
    /// The field this violation belongs to
    pub fn field(&self) -> AppealField {
        match self {
            Violation::MissingField { field }
            | Violation::MalformedDate { field }
            | Violation::InvalidName { field, .. } => *field,
            Violation::InvalidPhone => AppealField::Phone,
            Violation::InvalidEmail => AppealField::Email,
            Violation::InvalidBirthDate { .. } => AppealField::BirthDate,
            Violation::FutureIssueTime => AppealField::IssueDiscoveredAt,
            Violation::EmptyReasons | Violation::UnknownReason { .. } => AppealField::Reasons,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Violation::MissingField { .. } => "missing_field",
            Violation::MalformedDate { .. } => "malformed_date",
            Violation::InvalidName { .. } => "invalid_name",
            Violation::InvalidPhone => "invalid_phone",
            Violation::InvalidEmail => "invalid_email",
            Violation::InvalidBirthDate { .. } => "invalid_birth_date",
            Violation::FutureIssueTime => "future_issue_time",
            Violation::EmptyReasons => "empty_reasons",
            Violation::UnknownReason { .. } => "unknown_reason",
        }
    }
}

impl From<&Violation> for ErrorDetail {
    fn from(violation: &Violation) -> Self {
        ErrorDetail::for_field(
            violation.field().as_str(),
            violation.code(),
            violation.to_string(),
        )
    }
}

/// Ordered collection of every violation found in one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn details(&self) -> Vec<ErrorDetail> {
        self.0.iter().map(ErrorDetail::from).collect()
    }

    fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Keeps the value of a passing check, records the violation otherwise
    fn record<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        result.map_err(|violation| self.push(violation)).ok()
    }

    /// Reports a missing field and passes present values through
    fn require<'a, T: ?Sized>(
        &mut self,
        field: AppealField,
        value: Option<&'a T>,
    ) -> Option<&'a T> {
        if value.is_none() {
            self.push(Violation::MissingField { field });
        }
        value
    }
}

/// Validates a raw submission against every appeal rule.
///
/// `now` is the local wall-clock time the submission is judged against:
/// `birthDate` may not be after `now.date()` and `issueDiscoveredAt` may not
/// be after `now`.
pub fn validate(raw: &CreateAppealDto, now: NaiveDateTime) -> Result<Appeal, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let last_name = errors
        .require(AppealField::LastName, raw.last_name.as_deref())
        .and_then(|value| errors.record(check_name(AppealField::LastName, value)));

    let first_name = errors
        .require(AppealField::FirstName, raw.first_name.as_deref())
        .and_then(|value| errors.record(check_name(AppealField::FirstName, value)));

    let birth_date = errors
        .require(AppealField::BirthDate, raw.birth_date.as_deref())
        .and_then(|value| errors.record(check_birth_date(value, now.date())));

    let phone = errors
        .require(AppealField::Phone, raw.phone.as_deref())
        .and_then(|value| errors.record(check_phone(value)));

    let email = errors
        .require(AppealField::Email, raw.email.as_deref())
        .and_then(|value| errors.record(check_email(value)));

    let reasons = errors
        .require(AppealField::Reasons, raw.reasons.as_deref())
        .and_then(|values| match check_reasons(values) {
            Ok(reasons) => Some(reasons),
            Err(violations) => {
                violations.into_iter().for_each(|v| errors.push(v));
                None
            }
        });

    let issue_discovered_at = errors
        .require(AppealField::IssueDiscoveredAt, raw.issue_discovered_at.as_deref())
        .and_then(|value| errors.record(check_issue_time(value, now)));

    match (
        last_name,
        first_name,
        birth_date,
        phone,
        email,
        reasons,
        issue_discovered_at,
    ) {
        (
            Some(last_name),
            Some(first_name),
            Some(birth_date),
            Some(phone),
            Some(email),
            Some(reasons),
            Some(issue_discovered_at),
        ) if errors.is_empty() => Ok(Appeal {
            last_name,
            first_name,
            birth_date,
            phone,
            email,
            reasons,
            issue_discovered_at,
        }),
        _ => Err(errors),
    }
}

fn check_name(field: AppealField, value: &str) -> Result<String, Violation> {
    let invalid = |reason| Violation::InvalidName { field, reason };

    let len = value.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(invalid(NameViolation::Length));
    }

    if !value.chars().next().is_some_and(char::is_uppercase) {
        return Err(invalid(NameViolation::NotCapitalized));
    }

    // Hyphens are punctuation and skipped by the alphabet check
    if let Some(c) = first_non_cyrillic(value) {
        return Err(invalid(NameViolation::NonCyrillic(c)));
    }

    Ok(value.to_string())
}

fn check_phone(value: &str) -> Result<String, Violation> {
    if PHONE_REGEX.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(Violation::InvalidPhone)
    }
}

/// Lowercases the domain part; the local part is case-sensitive and kept
fn normalize_email(value: &str) -> String {
    match value.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => value.to_string(),
    }
}

/// Address literals and dotless hosts pass `validate_email` but are not
/// deliverable public addresses.
fn has_public_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => !domain.starts_with('[') && domain.contains('.'),
        None => false,
    }
}

fn check_email(value: &str) -> Result<String, Violation> {
    let email = normalize_email(value);
    if email.validate_email() && has_public_domain(&email) {
        Ok(email)
    } else {
        Err(Violation::InvalidEmail)
    }
}

/// Strict `YYYY-MM-DD` parse. chrono alone tolerates signs, padding and
/// single-digit months.
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn check_birth_date(value: &str, today: NaiveDate) -> Result<NaiveDate, Violation> {
    let date = parse_iso_date(value).ok_or(Violation::MalformedDate {
        field: AppealField::BirthDate,
    })?;

    if date > today {
        return Err(Violation::InvalidBirthDate {
            reason: BirthDateViolation::InFuture,
        });
    }
    if date.year() < MIN_BIRTH_YEAR {
        return Err(Violation::InvalidBirthDate {
            reason: BirthDateViolation::BeforeMinYear,
        });
    }

    Ok(date)
}

/// Parses an ISO-8601 timestamp. An explicit offset is dropped and the wall
/// clock reading in that offset is kept. A bare date means midnight.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let date_part = value.get(..10)?;
    let date = parse_iso_date(date_part)?;

    let time_part = &value[10..];
    if time_part.is_empty() {
        return Some(date.and_time(NaiveTime::MIN));
    }

    let mut chars = time_part.chars();
    if !matches!(chars.next(), Some('T' | 't' | ' ')) {
        return None;
    }
    let mut time_part = chars.as_str().to_string();
    if time_part.ends_with(['Z', 'z']) {
        time_part.pop();
        time_part.push_str("+00:00");
    }
    let normalized = format!("{}T{}", date_part, time_part);

    if let Some(with_offset) = OFFSET_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
    {
        return Some(with_offset.naive_local());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

fn check_issue_time(value: &str, now: NaiveDateTime) -> Result<NaiveDateTime, Violation> {
    let discovered_at = parse_timestamp(value).ok_or(Violation::MalformedDate {
        field: AppealField::IssueDiscoveredAt,
    })?;

    if discovered_at > now {
        return Err(Violation::FutureIssueTime);
    }

    Ok(discovered_at)
}

/// Resolves reason strings, collapsing repeats to their first occurrence
fn check_reasons(values: &[String]) -> Result<Vec<IssueReason>, Vec<Violation>> {
    if values.is_empty() {
        return Err(vec![Violation::EmptyReasons]);
    }

    let mut reasons = Vec::with_capacity(values.len());
    let mut violations = Vec::new();

    for value in values {
        match value.parse::<IssueReason>() {
            Ok(reason) => {
                if !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
            Err(UnknownIssueReason(value)) => violations.push(Violation::UnknownReason { value }),
        }
    }

    if violations.is_empty() {
        Ok(reasons)
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{fixed_now as now, valid_appeal_dto as valid_dto};

    fn single_violation(dto: &CreateAppealDto) -> Violation {
        let errors = validate(dto, now()).unwrap_err();
        assert_eq!(errors.len(), 1, "expected one violation, got {:?}", errors);
        errors.violations()[0].clone()
    }

    #[test]
    fn test_valid_submission_is_accepted() {
        let appeal = validate(&valid_dto(), now()).unwrap();

        assert_eq!(appeal.last_name, "Иванов");
        assert_eq!(appeal.first_name, "Пётр");
        assert_eq!(
            appeal.birth_date,
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );
        assert_eq!(appeal.phone, "+79991234567");
        assert_eq!(appeal.email, "ivanov@example.com");
        assert_eq!(
            appeal.reasons,
            vec![IssueReason::NoNetwork, IssueReason::NoEmails]
        );
        assert_eq!(
            appeal.issue_discovered_at,
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let dto = valid_dto();
        assert_eq!(validate(&dto, now()), validate(&dto, now()));

        let mut bad = valid_dto();
        bad.phone = Some("123".to_string());
        assert_eq!(validate(&bad, now()), validate(&bad, now()));
    }

    #[test]
    fn test_duplicate_reasons_are_collapsed() {
        let mut dto = valid_dto();
        dto.reasons = Some(vec![
            "NO_NETWORK".to_string(),
            "NO_EMAILS".to_string(),
            "NO_NETWORK".to_string(),
        ]);

        let appeal = validate(&dto, now()).unwrap();
        assert_eq!(
            appeal.reasons,
            vec![IssueReason::NoNetwork, IssueReason::NoEmails]
        );
    }

    #[test]
    fn test_reason_labels_are_accepted_and_deduplicated_against_codes() {
        let mut dto = valid_dto();
        dto.reasons = Some(vec![
            "не работает телефон".to_string(),
            "PHONE_NOT_WORKING".to_string(),
            "нет доступа к сети".to_string(),
        ]);

        let appeal = validate(&dto, now()).unwrap();
        assert_eq!(
            appeal.reasons,
            vec![IssueReason::PhoneNotWorking, IssueReason::NoNetwork]
        );
    }

    #[test]
    fn test_empty_reasons_rejected() {
        let mut dto = valid_dto();
        dto.reasons = Some(vec![]);
        assert_eq!(single_violation(&dto), Violation::EmptyReasons);
    }

    #[test]
    fn test_every_unknown_reason_is_reported() {
        let mut dto = valid_dto();
        dto.reasons = Some(vec![
            "NO_NETWORK".to_string(),
            "SLOW_INTERNET".to_string(),
            "no_emails".to_string(),
        ]);

        let errors = validate(&dto, now()).unwrap_err();
        assert_eq!(
            errors.violations(),
            &[
                Violation::UnknownReason {
                    value: "SLOW_INTERNET".to_string()
                },
                Violation::UnknownReason {
                    value: "no_emails".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_hyphenated_name_accepted() {
        let mut dto = valid_dto();
        dto.last_name = Some("А-та".to_string());
        assert_eq!(validate(&dto, now()).unwrap().last_name, "А-та");

        dto.last_name = Some("Римский-Корсаков".to_string());
        assert!(validate(&dto, now()).is_ok());
    }

    #[test]
    fn test_leading_hyphen_rejected() {
        let mut dto = valid_dto();
        dto.last_name = Some("-Ата".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::LastName,
                reason: NameViolation::NotCapitalized,
            }
        );
    }

    #[test]
    fn test_lowercase_first_letter_rejected() {
        let mut dto = valid_dto();
        dto.first_name = Some("пётр".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::NotCapitalized,
            }
        );
    }

    #[test]
    fn test_latin_characters_rejected() {
        let mut dto = valid_dto();
        dto.last_name = Some("Ivanov".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::LastName,
                reason: NameViolation::NonCyrillic('I'),
            }
        );

        dto.last_name = Some("Иван ов".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::LastName,
                reason: NameViolation::NonCyrillic(' '),
            }
        );
    }

    #[test]
    fn test_name_length_bounds() {
        let mut dto = valid_dto();

        dto.first_name = Some("Я".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::Length,
            }
        );

        dto.first_name = Some(String::new());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::Length,
            }
        );

        // Length counts characters, not UTF-8 bytes
        dto.first_name = Some("Ян".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.first_name = Some(format!("Я{}", "я".repeat(49)));
        assert!(validate(&dto, now()).is_ok());

        dto.first_name = Some(format!("Я{}", "я".repeat(50)));
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::Length,
            }
        );
    }

    #[test]
    fn test_phone_digit_count_boundary() {
        let mut dto = valid_dto();
        dto.phone = Some("+7999123456".to_string());
        assert_eq!(single_violation(&dto), Violation::InvalidPhone);

        dto.phone = Some("+79991234567".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.phone = Some("89991234567".to_string());
        assert_eq!(single_violation(&dto), Violation::InvalidPhone);
    }

    #[test]
    fn test_invalid_email_is_the_only_violation() {
        let mut dto = valid_dto();
        dto.email = Some("not-an-email".to_string());
        assert_eq!(single_violation(&dto), Violation::InvalidEmail);
    }

    #[test]
    fn test_email_domain_must_be_public_hostname() {
        for value in ["user@localhost", "ivanov@example", "a@[127.0.0.1]"] {
            let mut dto = valid_dto();
            dto.email = Some(value.to_string());
            assert_eq!(single_violation(&dto), Violation::InvalidEmail, "{value}");
        }

        let mut dto = valid_dto();
        dto.email = Some("user@mail.example.ru".to_string());
        assert!(validate(&dto, now()).is_ok());
    }

    #[test]
    fn test_email_domain_is_lowercased() {
        let mut dto = valid_dto();
        dto.email = Some("Ivanov@Example.COM".to_string());
        assert_eq!(validate(&dto, now()).unwrap().email, "Ivanov@example.com");
    }

    #[test]
    fn test_birth_date_year_boundary() {
        let mut dto = valid_dto();
        dto.birth_date = Some("1899-12-31".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidBirthDate {
                reason: BirthDateViolation::BeforeMinYear,
            }
        );

        dto.birth_date = Some("1900-01-01".to_string());
        assert!(validate(&dto, now()).is_ok());
    }

    #[test]
    fn test_birth_date_today_boundary() {
        let mut dto = valid_dto();
        dto.birth_date = Some("2025-06-01".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.birth_date = Some("2025-06-02".to_string());
        assert_eq!(
            single_violation(&dto),
            Violation::InvalidBirthDate {
                reason: BirthDateViolation::InFuture,
            }
        );
    }

    #[test]
    fn test_birth_date_requires_exact_iso_form() {
        for value in ["1990-5-15", "+1990-05-15", " 1990-05-15", "1990-05-15 ", "1990/05/15"] {
            let mut dto = valid_dto();
            dto.birth_date = Some(value.to_string());
            assert_eq!(
                single_violation(&dto),
                Violation::MalformedDate {
                    field: AppealField::BirthDate
                },
                "{value}"
            );
        }
    }

    #[test]
    fn test_malformed_dates_rejected() {
        let mut dto = valid_dto();
        dto.birth_date = Some("15.05.1990".to_string());
        dto.issue_discovered_at = Some("yesterday".to_string());

        let errors = validate(&dto, now()).unwrap_err();
        assert_eq!(
            errors.violations(),
            &[
                Violation::MalformedDate {
                    field: AppealField::BirthDate
                },
                Violation::MalformedDate {
                    field: AppealField::IssueDiscoveredAt
                },
            ]
        );
    }

    #[test]
    fn test_issue_time_clock_boundary() {
        let mut dto = valid_dto();

        dto.issue_discovered_at = Some("2025-06-01T12:00:00".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.issue_discovered_at = Some("2025-06-01T12:00:00.000000001".to_string());
        assert_eq!(single_violation(&dto), Violation::FutureIssueTime);

        // The same input flips to accepted once the clock moves past it
        let later = now() + chrono::Duration::seconds(1);
        assert!(validate(&dto, later).is_ok());
    }

    #[test]
    fn test_issue_time_offset_is_stripped() {
        let mut dto = valid_dto();

        // 13:00 wall clock is after 12:00 even though the instant is 10:00 UTC
        dto.issue_discovered_at = Some("2025-06-01T13:00:00+03:00".to_string());
        assert_eq!(single_violation(&dto), Violation::FutureIssueTime);

        dto.issue_discovered_at = Some("2025-06-01T11:00:00-05:00".to_string());
        let appeal = validate(&dto, now()).unwrap();
        assert_eq!(
            appeal.issue_discovered_at,
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap()
        );

        dto.issue_discovered_at = Some("2025-06-01T09:15:00Z".to_string());
        assert!(validate(&dto, now()).is_ok());
    }

    #[test]
    fn test_issue_time_accepts_space_separator_and_minutes() {
        let mut dto = valid_dto();
        dto.issue_discovered_at = Some("2025-01-15 14:30:00".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.issue_discovered_at = Some("2025-01-15T14:30".to_string());
        assert!(validate(&dto, now()).is_ok());

        dto.issue_discovered_at = Some("2025-01-15t14:30:00".to_string());
        assert!(validate(&dto, now()).is_ok());
    }

    #[test]
    fn test_issue_time_bare_date_is_midnight() {
        let mut dto = valid_dto();
        dto.issue_discovered_at = Some("2025-01-15".to_string());

        let appeal = validate(&dto, now()).unwrap();
        assert_eq!(
            appeal.issue_discovered_at,
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        // Midnight of a future day is still in the future
        dto.issue_discovered_at = Some("2025-06-02".to_string());
        assert_eq!(single_violation(&dto), Violation::FutureIssueTime);
    }

    #[test]
    fn test_issue_time_offset_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        for value in [
            "2025-01-15T14:30:00+0300",
            "2025-01-15T14:30+03:00",
            "2025-01-15T14:30+0300",
            "2025-01-15T14:30Z",
            "2025-01-15 14:30:00.000-05:00",
        ] {
            let mut dto = valid_dto();
            dto.issue_discovered_at = Some(value.to_string());
            let appeal = validate(&dto, now()).unwrap();
            assert_eq!(appeal.issue_discovered_at, expected, "{value}");
        }
    }

    #[test]
    fn test_issue_time_rejects_loose_forms() {
        for value in [
            "2025-1-15T14:30:00",
            "2025-01-15X14:30:00",
            "2025-01-15T",
            "+2025-01-15",
        ] {
            let mut dto = valid_dto();
            dto.issue_discovered_at = Some(value.to_string());
            assert_eq!(
                single_violation(&dto),
                Violation::MalformedDate {
                    field: AppealField::IssueDiscoveredAt
                },
                "{value}"
            );
        }
    }

    #[test]
    fn test_all_violations_are_collected_in_field_order() {
        let dto = CreateAppealDto {
            last_name: Some("smith".to_string()),
            first_name: Some("Jo".to_string()),
            birth_date: Some("1800-01-01".to_string()),
            phone: Some("+7999".to_string()),
            email: Some("nope".to_string()),
            reasons: Some(vec![]),
            issue_discovered_at: Some("2030-01-01T00:00:00".to_string()),
        };

        let errors = validate(&dto, now()).unwrap_err();
        let fields: Vec<AppealField> = errors.violations().iter().map(Violation::field).collect();
        assert_eq!(
            fields,
            vec![
                AppealField::LastName,
                AppealField::FirstName,
                AppealField::BirthDate,
                AppealField::Phone,
                AppealField::Email,
                AppealField::Reasons,
                AppealField::IssueDiscoveredAt,
            ]
        );
        assert_eq!(
            errors.violations()[1],
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::NonCyrillic('J'),
            }
        );
    }

    #[test]
    fn test_missing_fields_reported() {
        let errors = validate(&CreateAppealDto::default(), now()).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(errors
            .violations()
            .iter()
            .all(|v| matches!(v, Violation::MissingField { .. })));

        let mut dto = valid_dto();
        dto.email = None;
        assert_eq!(
            single_violation(&dto),
            Violation::MissingField {
                field: AppealField::Email
            }
        );
    }

    #[test]
    fn test_error_details_carry_field_code_and_message() {
        let mut dto = valid_dto();
        dto.last_name = Some("Ivanov".to_string());
        dto.phone = None;

        let details = validate(&dto, now()).unwrap_err().details();
        assert_eq!(
            details,
            vec![
                ErrorDetail::for_field(
                    "lastName",
                    "invalid_name",
                    "lastName: только кириллица, найден символ 'I'"
                ),
                ErrorDetail::for_field("phone", "missing_field", "Обязательное поле"),
            ]
        );
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::InvalidName {
                field: AppealField::FirstName,
                reason: NameViolation::Length,
            }
            .to_string(),
            "firstName: длина должна быть от 2 до 50 символов"
        );
        assert_eq!(
            Violation::InvalidBirthDate {
                reason: BirthDateViolation::BeforeMinYear,
            }
            .to_string(),
            "Дата рождения не может быть ранее 1900 года"
        );
        assert_eq!(
            Violation::UnknownReason {
                value: "X".to_string()
            }
            .to_string(),
            "Неизвестная причина обращения: 'X'"
        );
    }
}
