//! Per-stage validation rules

use super::clock::Clock;
use super::error::{FieldError, FormErrors};
use super::validators::{validate_email, validate_phone};
use crate::state::{Field, FormData, STAGES};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run every rule for the fields of `stage` and collect all failures.
///
/// The stage is valid when the returned map is empty. An unknown stage
/// index has no fields and is therefore always valid.
pub fn validate_stage(stage: usize, data: &FormData, clock: &dyn Clock) -> FormErrors {
    let mut errors = FormErrors::new();
    let Some(config) = STAGES.get(stage) else {
        return errors;
    };

    let today = clock.today();
    for field in config.fields {
        if let Some(err) = validate_field(*field, data, today) {
            errors.insert(*field, err);
        }
    }

    errors
}

fn validate_field(field: Field, data: &FormData, today: NaiveDate) -> Option<FieldError> {
    match field {
        Field::FullName => require_trimmed(&data.full_name, "Full Name is required."),
        Field::DateOfBirth => {
            if data.date_of_birth.is_empty() {
                return Some(FieldError::Required("Date of Birth is required."));
            }
            parse_date(&data.date_of_birth).err().map(|_| {
                FieldError::InvalidFormat("Date of Birth must be a valid date (YYYY-MM-DD).")
            })
        }
        Field::Nationality => require_trimmed(&data.nationality, "Nationality is required."),
        Field::Email => require_trimmed(&data.email, "Email is required.").or_else(|| {
            (!validate_email(&data.email))
                .then_some(FieldError::InvalidFormat("Invalid email format."))
        }),
        Field::Phone => require_trimmed(&data.phone, "Phone number is required.").or_else(|| {
            (!validate_phone(&data.phone))
                .then_some(FieldError::InvalidFormat("Invalid phone number format."))
        }),
        Field::DepartureDate => {
            if data.departure_date.is_empty() {
                return Some(FieldError::Required("Departure Date is required."));
            }
            match parse_date(&data.departure_date) {
                Err(_) => Some(FieldError::InvalidFormat(
                    "Departure Date must be a valid date (YYYY-MM-DD).",
                )),
                Ok(departure) if departure <= today => Some(FieldError::CrossField(
                    "Departure Date must be in the future.",
                )),
                Ok(_) => None,
            }
        }
        Field::ReturnDate => {
            if data.return_date.is_empty() {
                return Some(FieldError::Required("Return Date is required."));
            }
            let Ok(ret) = parse_date(&data.return_date) else {
                return Some(FieldError::InvalidFormat(
                    "Return Date must be a valid date (YYYY-MM-DD).",
                ));
            };
            // Only comparable once the departure date itself is usable
            match parse_date(&data.departure_date) {
                Ok(departure) if ret <= departure => Some(FieldError::CrossField(
                    "Return Date must be after Departure Date.",
                )),
                _ => None,
            }
        }
        Field::AccommodationPreference => data
            .accommodation_preference
            .is_none()
            .then_some(FieldError::Required("Accommodation Preference is required.")),
        Field::HealthDeclaration => (!data.health_declaration).then_some(FieldError::Required(
            "Health Declaration is required. You must confirm you are healthy.",
        )),
        Field::EmergencyContact => require_trimmed(
            &data.emergency_contact,
            "Emergency Contact Information is required.",
        ),
        Field::SpecialRequests | Field::MedicalConditions => None,
    }
}

fn require_trimmed(value: &str, message: &'static str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then_some(FieldError::Required(message))
}

fn parse_date(value: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Accommodation;
    use crate::validation::MockClock;
    use pretty_assertions::assert_eq;

    fn clock_at(y: i32, m: u32, d: u32) -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        clock
    }

    fn valid_data() -> FormData {
        FormData {
            full_name: "Ada Lovelace".to_string(),
            date_of_birth: "1990-12-10".to_string(),
            nationality: "British".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            departure_date: "2030-06-01".to_string(),
            return_date: "2030-12-01".to_string(),
            accommodation_preference: Some(Accommodation::SpaceHotel),
            special_requests: String::new(),
            health_declaration: true,
            emergency_contact: "Charles Babbage".to_string(),
            medical_conditions: String::new(),
        }
    }

    fn fields(errors: &FormErrors) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| errors.get(*f).is_some())
            .collect()
    }

    mod personal_info {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_stage_has_no_errors() {
            let errors = validate_stage(0, &valid_data(), &clock_at(2026, 1, 1));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_empty_stage_accumulates_all_errors() {
            let errors = validate_stage(0, &FormData::default(), &clock_at(2026, 1, 1));
            assert_eq!(
                fields(&errors),
                vec![
                    Field::FullName,
                    Field::DateOfBirth,
                    Field::Nationality,
                    Field::Email,
                    Field::Phone,
                ]
            );
            assert_eq!(
                errors.get(Field::Email),
                Some(&FieldError::Required("Email is required."))
            );
            assert_eq!(
                errors.get(Field::Phone),
                Some(&FieldError::Required("Phone number is required."))
            );
        }

        #[test]
        fn test_whitespace_name_is_missing() {
            let mut data = valid_data();
            data.full_name = "   ".to_string();
            let errors = validate_stage(0, &data, &clock_at(2026, 1, 1));
            assert_eq!(
                errors.get(Field::FullName),
                Some(&FieldError::Required("Full Name is required."))
            );
        }

        #[test]
        fn test_bad_email_and_phone_formats() {
            let mut data = valid_data();
            data.email = "invalid-email".to_string();
            data.phone = "abc-123-4567".to_string();
            let errors = validate_stage(0, &data, &clock_at(2026, 1, 1));
            assert_eq!(
                errors.get(Field::Email),
                Some(&FieldError::InvalidFormat("Invalid email format."))
            );
            assert_eq!(
                errors.get(Field::Phone),
                Some(&FieldError::InvalidFormat("Invalid phone number format."))
            );
        }

        #[test]
        fn test_unparseable_birth_date() {
            let mut data = valid_data();
            data.date_of_birth = "10/12/1990".to_string();
            let errors = validate_stage(0, &data, &clock_at(2026, 1, 1));
            assert_eq!(fields(&errors), vec![Field::DateOfBirth]);
        }

        #[test]
        fn test_later_stage_fields_are_ignored() {
            let mut data = valid_data();
            data.departure_date.clear();
            data.health_declaration = false;
            let errors = validate_stage(0, &data, &clock_at(2026, 1, 1));
            assert!(errors.is_empty());
        }
    }

    mod travel {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_departure_in_past() {
            let mut data = valid_data();
            data.departure_date = "2020-01-01".to_string();
            data.return_date = "2020-02-01".to_string();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(
                errors.get(Field::DepartureDate),
                Some(&FieldError::CrossField(
                    "Departure Date must be in the future."
                ))
            );
        }

        #[test]
        fn test_departure_today_is_not_future() {
            let mut data = valid_data();
            data.departure_date = "2026-01-01".to_string();
            data.return_date = "2026-02-01".to_string();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(fields(&errors), vec![Field::DepartureDate]);
        }

        #[test]
        fn test_departure_tomorrow_is_future() {
            let mut data = valid_data();
            data.departure_date = "2026-01-02".to_string();
            data.return_date = "2026-02-01".to_string();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_return_equal_to_departure() {
            let mut data = valid_data();
            data.return_date = data.departure_date.clone();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(fields(&errors), vec![Field::ReturnDate]);
            assert_eq!(
                errors.get(Field::ReturnDate).map(|e| e.to_string()),
                Some("Return Date must be after Departure Date.".to_string())
            );
        }

        #[test]
        fn test_return_before_departure() {
            let mut data = valid_data();
            data.return_date = "2030-01-01".to_string();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(fields(&errors), vec![Field::ReturnDate]);
        }

        #[test]
        fn test_return_not_compared_without_departure() {
            let mut data = valid_data();
            data.departure_date.clear();
            data.return_date = "2000-01-01".to_string();
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(fields(&errors), vec![Field::DepartureDate]);
        }

        #[test]
        fn test_missing_accommodation() {
            let mut data = valid_data();
            data.accommodation_preference = None;
            let errors = validate_stage(1, &data, &clock_at(2026, 1, 1));
            assert_eq!(
                errors.get(Field::AccommodationPreference),
                Some(&FieldError::Required(
                    "Accommodation Preference is required."
                ))
            );
        }

        #[test]
        fn test_special_requests_optional() {
            let errors = validate_stage(1, &valid_data(), &clock_at(2026, 1, 1));
            assert!(errors.get(Field::SpecialRequests).is_none());
        }
    }

    mod health {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_declaration_and_contact_required() {
            let mut data = valid_data();
            data.health_declaration = false;
            data.emergency_contact = " ".to_string();
            let errors = validate_stage(2, &data, &clock_at(2026, 1, 1));
            assert_eq!(
                fields(&errors),
                vec![Field::HealthDeclaration, Field::EmergencyContact]
            );
        }

        #[test]
        fn test_valid_health_stage() {
            let errors = validate_stage(2, &valid_data(), &clock_at(2026, 1, 1));
            assert!(errors.is_empty());
        }
    }

    #[test]
    fn test_unknown_stage_is_valid() {
        let mut clock = MockClock::new();
        clock.expect_today().never();
        let errors = validate_stage(7, &FormData::default(), &clock);
        assert!(errors.is_empty());
    }
}
