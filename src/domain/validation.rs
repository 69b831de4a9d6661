use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A single structural rule violation, tied to the field that caused it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every violation found while validating one request, in evaluation order
///
/// Independent checks never short-circuit: callers push each failure and
/// inspect the collection once all rules have run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Records the failure of `result`, if any
    pub fn check(&mut self, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `Ok(value)` when nothing was recorded
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

/// Checks that `value` is exactly one of the `allowed` tokens
///
/// Matching is case-sensitive. The error lists the allowed tokens in the
/// order they were declared.
///
/// # Example
/// ```
/// use beyondsports_api::domain::validation::validate_one_of;
///
/// assert!(validate_one_of("Foot", "Left", &["Left", "Right", "Both"]).is_ok());
/// assert!(validate_one_of("Foot", "left", &["Left", "Right", "Both"]).is_err());
/// ```
pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), FieldError> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(invalid_choice(field, allowed))
}

/// The error reported when a value is not one of `allowed`
pub fn invalid_choice(field: &str, allowed: &[&str]) -> FieldError {
    FieldError::new(
        field,
        format!(
            "Invalid value for {}. Allowed values are: {}",
            field,
            allowed.join(", ")
        ),
    )
}

/// Calendar age on `today` for someone born on `birth_date`
///
/// The age only increments once the birth month/day has been reached in
/// the current year.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Checks that a birth date yields an age within `[min_age, max_age]` on `today`
pub fn validate_age(
    field: &str,
    birth_date: Option<NaiveDate>,
    min_age: i32,
    max_age: i32,
    today: NaiveDate,
) -> Result<(), FieldError> {
    let Some(birth_date) = birth_date else {
        return Err(FieldError::new(field, format!("{} is required.", field)));
    };

    let age = age_on(birth_date, today);
    if age < min_age || age > max_age {
        return Err(FieldError::new(
            field,
            format!(
                "The player's age must be between {} and {} years.",
                min_age, max_age
            ),
        ));
    }

    Ok(())
}

/// Checks a character-count range (inclusive)
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FieldError::new(
            field,
            format!(
                "The field {} must be a string with a minimum length of {} and a maximum length of {}.",
                field, min, max
            ),
        ));
    }
    Ok(())
}

/// Checks an inclusive integer range
pub fn validate_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError::new(
            field,
            format!("The field {} must be between {} and {}.", field, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_of_accepts_exact_member() {
        assert!(validate_one_of("Position", "Goalkeeper", &["Forward", "Goalkeeper"]).is_ok());
    }

    #[test]
    fn one_of_is_case_sensitive() {
        assert!(validate_one_of("Position", "goalkeeper", &["Forward", "Goalkeeper"]).is_err());
    }

    #[test]
    fn one_of_lists_allowed_values_in_declared_order() {
        let err = validate_one_of("Foot", "Head", &["Left", "Right", "Both"]).unwrap_err();

        assert_eq!(err.field, "Foot");
        assert_eq!(
            err.message,
            "Invalid value for Foot. Allowed values are: Left, Right, Both"
        );
    }

    #[test]
    fn age_before_birthday_in_current_year() {
        assert_eq!(age_on(date(2000, 1, 1), date(2025, 12, 31)), 25);
        assert_eq!(age_on(date(2000, 6, 15), date(2026, 6, 14)), 25);
    }

    #[test]
    fn age_on_and_after_birthday() {
        assert_eq!(age_on(date(2000, 1, 1), date(2026, 1, 1)), 26);
        assert_eq!(age_on(date(2000, 6, 15), date(2026, 6, 15)), 26);
        assert_eq!(age_on(date(2000, 6, 15), date(2026, 10, 19)), 26);
    }

    #[test]
    fn age_for_leap_day_birthday() {
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let today = date(2026, 10, 19);

        assert!(validate_age("BirthDate", Some(date(2010, 10, 19)), 16, 50, today).is_ok());
        assert!(validate_age("BirthDate", Some(date(1976, 10, 19)), 16, 50, today).is_ok());
    }

    #[test]
    fn age_outside_bounds_fails() {
        let today = date(2026, 10, 19);

        let too_young = validate_age("BirthDate", Some(date(2010, 10, 20)), 16, 50, today);
        let too_old = validate_age("BirthDate", Some(date(1975, 10, 19)), 16, 50, today);

        assert_eq!(
            too_young.unwrap_err().message,
            "The player's age must be between 16 and 50 years."
        );
        assert!(too_old.is_err());
    }

    #[test]
    fn missing_birth_date_fails() {
        let err = validate_age("BirthDate", None, 16, 50, date(2026, 1, 1)).unwrap_err();
        assert_eq!(err.message, "BirthDate is required.");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_length("Name", "Öz", 2, 50).is_ok());
        assert!(validate_length("Name", "A", 2, 50).is_err());
        assert!(validate_length("Name", &"x".repeat(51), 2, 50).is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(validate_range("Number", 1, 1, 99).is_ok());
        assert!(validate_range("Number", 99, 1, 99).is_ok());
        assert!(validate_range("Number", 0, 1, 99).is_err());
        assert!(validate_range("Number", 100, 1, 99).is_err());
    }

    #[test]
    fn collected_errors_keep_order_and_join_messages() {
        let mut errors = ValidationErrors::new();
        errors.check(validate_range("Number", 0, 1, 99));
        errors.check(Ok(()));
        errors.check(validate_range("Height", 300, 120, 240));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].field, "Number");
        assert_eq!(errors.errors()[1].field, "Height");
        assert_eq!(
            errors.to_string(),
            "The field Number must be between 1 and 99.\nThe field Height must be between 120 and 240."
        );
        assert!(errors.finish(()).is_err());
    }
}
