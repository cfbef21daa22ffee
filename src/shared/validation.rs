use lazy_static::lazy_static;
use regex::Regex;

/// Lowest accepted birth year
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Inclusive bounds for personal name length, counted in characters
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

lazy_static! {
    /// Regex for validating subscriber phone numbers
    /// Must be "+7" followed by exactly 10 ASCII digits
    /// - Valid: "+79991234567"
    /// - Invalid: "89991234567", "+7999123456", "+7 999 123 45 67", "+799912345678"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+7[0-9]{10}$").unwrap();
}

/// Returns true when `c` lies in the Cyrillic block (U+0400..=U+04FF)
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Finds the first character of a name that is neither a hyphen nor Cyrillic
pub fn first_non_cyrillic(name: &str) -> Option<char> {
    name.chars().filter(|&c| c != '-').find(|&c| !is_cyrillic(c))
}
