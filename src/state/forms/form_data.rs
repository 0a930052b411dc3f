//! Typed application record and the submission summary

use super::field::{Accommodation, Field};

const NOT_PROVIDED: &str = "N/A";
const HEALTH_DECLARED: &str = "Declared healthy and fit for space travel";

/// Everything the applicant has entered so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub full_name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    pub departure_date: String,
    pub return_date: String,
    pub accommodation_preference: Option<Accommodation>,
    pub special_requests: String,
    pub health_declaration: bool,
    pub emergency_contact: String,
    pub medical_conditions: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self::with_accommodation(Some(Accommodation::default()))
    }
}

impl FormData {
    /// Empty record with the given accommodation preselected
    pub fn with_accommodation(accommodation: Option<Accommodation>) -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            nationality: String::new(),
            email: String::new(),
            phone: String::new(),
            departure_date: String::new(),
            return_date: String::new(),
            accommodation_preference: accommodation,
            special_requests: String::new(),
            health_declaration: false,
            emergency_contact: String::new(),
            medical_conditions: String::new(),
        }
    }

    /// Borrow the string backing a text-like field.
    /// Returns `None` for the choice and checkbox fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FullName => &self.full_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Nationality => &self.nationality,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::DepartureDate => &self.departure_date,
            Field::ReturnDate => &self.return_date,
            Field::SpecialRequests => &self.special_requests,
            Field::EmergencyContact => &self.emergency_contact,
            Field::MedicalConditions => &self.medical_conditions,
            Field::AccommodationPreference | Field::HealthDeclaration => return None,
        };
        Some(value)
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FullName => &mut self.full_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Nationality => &mut self.nationality,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::DepartureDate => &mut self.departure_date,
            Field::ReturnDate => &mut self.return_date,
            Field::SpecialRequests => &mut self.special_requests,
            Field::EmergencyContact => &mut self.emergency_contact,
            Field::MedicalConditions => &mut self.medical_conditions,
            Field::AccommodationPreference | Field::HealthDeclaration => return None,
        };
        Some(value)
    }

    /// Display value of a field as it appears on the summary
    pub fn summary_value(&self, field: Field) -> String {
        match field {
            Field::AccommodationPreference => self
                .accommodation_preference
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            Field::HealthDeclaration => {
                if self.health_declaration {
                    HEALTH_DECLARED.to_string()
                } else {
                    "No".to_string()
                }
            }
            _ => match self.text(field) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => NOT_PROVIDED.to_string(),
            },
        }
    }
}

/// Summary rows for every field, in form order
pub fn summary_lines(data: &FormData) -> Vec<(&'static str, String)> {
    Field::ALL
        .iter()
        .map(|f| (f.summary_label(), data.summary_value(*f)))
        .collect()
}

/// Plain-text rendering of the summary (used for the clipboard)
pub fn summary_text(data: &FormData) -> String {
    let mut out = String::from("Mars Visit Application\n");
    for (label, value) in summary_lines(data) {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FormData {
        FormData {
            full_name: "Ada Lovelace".to_string(),
            date_of_birth: "1990-12-10".to_string(),
            nationality: "British".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0958".to_string(),
            departure_date: "2031-03-01".to_string(),
            return_date: "2031-09-01".to_string(),
            accommodation_preference: Some(Accommodation::MartianBase),
            special_requests: String::new(),
            health_declaration: true,
            emergency_contact: "Charles, +44 20 7946 0000".to_string(),
            medical_conditions: String::new(),
        }
    }

    #[test]
    fn test_default_preselects_space_hotel() {
        let data = FormData::default();
        assert_eq!(
            data.accommodation_preference,
            Some(Accommodation::SpaceHotel)
        );
        assert!(!data.health_declaration);
        assert_eq!(data.full_name, "");
    }

    #[test]
    fn test_text_is_none_for_non_text_fields() {
        let data = FormData::default();
        assert!(data.text(Field::AccommodationPreference).is_none());
        assert!(data.text(Field::HealthDeclaration).is_none());
        assert_eq!(data.text(Field::Email), Some(""));
    }

    #[test]
    fn test_text_mut_writes_through() {
        let mut data = FormData::default();
        if let Some(s) = data.text_mut(Field::Nationality) {
            s.push_str("Martian");
        }
        assert_eq!(data.nationality, "Martian");
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&filled());
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], ("Full Name", "Ada Lovelace".to_string()));
        assert_eq!(
            lines[7],
            ("Accommodation Preference", "Martian Base".to_string())
        );
        assert_eq!(lines[8], ("Special Requests", "N/A".to_string()));
        assert_eq!(
            lines[9],
            (
                "Health Declaration",
                "Declared healthy and fit for space travel".to_string()
            )
        );
        assert_eq!(lines[11], ("Medical Conditions", "N/A".to_string()));
    }

    #[test]
    fn test_summary_undeclared_health_is_no() {
        let data = FormData::default();
        assert_eq!(data.summary_value(Field::HealthDeclaration), "No");
    }

    #[test]
    fn test_summary_missing_accommodation() {
        let data = FormData::with_accommodation(None);
        assert_eq!(data.summary_value(Field::AccommodationPreference), "N/A");
    }

    #[test]
    fn test_summary_text() {
        let text = summary_text(&filled());
        assert!(text.starts_with("Mars Visit Application\n"));
        assert!(text.contains("Email: ada@example.com\n"));
        assert_eq!(text.lines().count(), 13);
    }
}
