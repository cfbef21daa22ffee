pub mod clock;
pub mod test_helpers;
pub mod types;
pub mod validation;
