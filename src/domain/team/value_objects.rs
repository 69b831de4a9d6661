use crate::domain::validation::{FieldError, ValidationErrors};

/// Countries a team may be registered in
pub const VALID_COUNTRIES: &[&str] = &[
    "United States",
    "Germany",
    "The Netherlands",
    "France",
    "Spain",
];

/// Cities a team may be based in
pub const VALID_CITIES: &[&str] = &[
    "Amsterdam",
    "Berlin",
    "Paris",
    "Madrid",
    "New York",
    "Enschede",
];

/// Stadiums a team may play in
pub const VALID_STADIUMS: &[&str] = &[
    "Wembley",
    "De Grolsch Veste",
    "Johan Cruyff Arena",
    "Camp Nou",
];

/// Checks one allow-list membership for a team property
///
/// `label` is the lowercase singular used in the message ("country"),
/// `plural` the lowercase plural ("countries").
fn check_allowed(
    field: &str,
    label: &str,
    plural: &str,
    value: &str,
    allowed: &[&str],
) -> Result<(), FieldError> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(FieldError::new(
        field,
        format!(
            "Invalid {} '{}'. Valid {} are: {}.",
            label,
            value,
            plural,
            allowed.join(", ")
        ),
    ))
}

/// Validates country, city and stadium against their allow-lists
///
/// All three checks always run; every violation ends up in the returned
/// collection so a caller sees the complete set of problems at once.
///
/// # Example
/// ```
/// use beyondsports_api::domain::team::value_objects::validate_team_properties;
///
/// let errors = validate_team_properties("Mars", "Olympus", "Crater").unwrap_err();
/// assert_eq!(errors.len(), 3);
/// ```
pub fn validate_team_properties(
    country: &str,
    city: &str,
    stadium: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check(check_allowed(
        "Country",
        "country",
        "countries",
        country,
        VALID_COUNTRIES,
    ));
    errors.check(check_allowed("City", "city", "cities", city, VALID_CITIES));
    errors.check(check_allowed(
        "Stadium",
        "stadium",
        "stadiums",
        stadium,
        VALID_STADIUMS,
    ));

    errors.finish(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_properties_pass() {
        assert!(validate_team_properties("The Netherlands", "Enschede", "De Grolsch Veste").is_ok());
    }

    #[test]
    fn single_violation_names_field_value_and_allowed_set() {
        let errors = validate_team_properties("Belgium", "Amsterdam", "Camp Nou").unwrap_err();

        assert_eq!(errors.len(), 1);
        let error = &errors.errors()[0];
        assert_eq!(error.field, "Country");
        assert_eq!(
            error.message,
            "Invalid country 'Belgium'. Valid countries are: United States, Germany, The Netherlands, France, Spain."
        );
    }

    #[test]
    fn all_violations_are_reported_together() {
        let errors = validate_team_properties("Belgium", "Brussels", "Heysel").unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Country", "City", "Stadium"]);
        assert!(errors.errors()[1].message.contains("'Brussels'"));
        assert!(errors.errors()[2]
            .message
            .ends_with("Wembley, De Grolsch Veste, Johan Cruyff Arena, Camp Nou."));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(validate_team_properties("the netherlands", "Enschede", "De Grolsch Veste").is_err());
    }
}
