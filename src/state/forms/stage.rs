//! Static stage layout

use super::field::Field;

/// One page of the wizard
#[derive(Debug)]
pub struct StageConfig {
    pub title: &'static str,
    pub fields: &'static [Field],
}

pub const TOTAL_STAGES: usize = 3;

pub static STAGES: [StageConfig; TOTAL_STAGES] = [
    StageConfig {
        title: "Stage 1: Personal Information",
        fields: &[
            Field::FullName,
            Field::DateOfBirth,
            Field::Nationality,
            Field::Email,
            Field::Phone,
        ],
    },
    StageConfig {
        title: "Stage 2: Travel Preferences",
        fields: &[
            Field::DepartureDate,
            Field::ReturnDate,
            Field::AccommodationPreference,
            Field::SpecialRequests,
        ],
    },
    StageConfig {
        title: "Stage 3: Health and Safety",
        fields: &[
            Field::HealthDeclaration,
            Field::EmergencyContact,
            Field::MedicalConditions,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_belongs_to_exactly_one_stage() {
        for field in Field::ALL {
            let owners = STAGES
                .iter()
                .filter(|s| s.fields.contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
        }
    }

    #[test]
    fn test_stage_fields_follow_form_order() {
        let flattened: Vec<Field> = STAGES.iter().flat_map(|s| s.fields.iter().copied()).collect();
        assert_eq!(flattened, Field::ALL.to_vec());
    }

    #[test]
    fn test_total_stages() {
        assert_eq!(TOTAL_STAGES, 3);
    }
}
