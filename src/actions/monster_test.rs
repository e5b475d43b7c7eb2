use super::*;

fn errors(pairs: &[(&str, &str)]) -> FormErrors {
    pairs.iter().copied().collect()
}

// =============================================================
// apply_validation
// =============================================================

#[test]
fn apply_validation_single_field_sets_message() {
    let mut current = errors(&[("citizenship", "Unknown country")]);
    apply_validation(&mut current, "name", errors(&[("name", "Required")]));
    assert_eq!(current, errors(&[("citizenship", "Unknown country"), ("name", "Required")]));
}

#[test]
fn apply_validation_single_field_clears_when_clean() {
    let mut current = errors(&[("name", "Required")]);
    apply_validation(&mut current, "name", FormErrors::new());
    assert!(current.is_empty());
}

#[test]
fn apply_validation_single_field_ignores_other_keys_in_response() {
    let mut current = FormErrors::new();
    apply_validation(&mut current, "name", errors(&[("birthDate", "Invalid date")]));
    assert!(current.is_empty());
}

#[test]
fn apply_validation_all_replaces_everything() {
    let mut current = errors(&[("name", "Required")]);
    apply_validation(&mut current, VALIDATE_ALL, errors(&[("birthDate", "Invalid date")]));
    assert_eq!(current, errors(&[("birthDate", "Invalid date")]));
}

// =============================================================
// validation_outcome
// =============================================================

#[test]
fn validation_outcome_clean_is_ok() {
    assert_eq!(validation_outcome(VALIDATE_ALL, &FormErrors::new()), Ok(()));
    assert_eq!(validation_outcome("name", &errors(&[("name", "")])), Ok(()));
}

#[test]
fn validation_outcome_all_rejects_with_first_message() {
    let result = errors(&[("citizenship", ""), ("name", "Name required")]);
    assert_eq!(
        validation_outcome(VALIDATE_ALL, &result),
        Err(ActionError::Rejected("Name required".to_owned()))
    );
}

#[test]
fn validation_outcome_single_field_only_checks_that_field() {
    let result = errors(&[("citizenship", "Unknown country")]);
    assert_eq!(validation_outcome("name", &result), Ok(()));
    assert!(validation_outcome("citizenship", &result).is_err());
}

#[test]
fn rejected_error_displays_bare_message() {
    assert_eq!(ActionError::Rejected("Name required".to_owned()).to_string(), "Name required");
    assert_eq!(ActionError::Request("timeout".to_owned()).to_string(), "request failed: timeout");
}
