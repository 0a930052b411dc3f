//! Form field identifiers and their static metadata

use serde::{Deserialize, Serialize};

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Free text expected as `YYYY-MM-DD`
    Date,
    Email,
    Phone,
    Multiline,
    /// One of the `Accommodation` options
    Choice,
    Checkbox,
}

/// Every data point collected by the application, in form order.
///
/// The derived `Ord` follows declaration order, which is what makes
/// "first invalid field" well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // Stage 1
    FullName,
    DateOfBirth,
    Nationality,
    Email,
    Phone,
    // Stage 2
    DepartureDate,
    ReturnDate,
    AccommodationPreference,
    SpecialRequests,
    // Stage 3
    HealthDeclaration,
    EmergencyContact,
    MedicalConditions,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FullName,
        Field::DateOfBirth,
        Field::Nationality,
        Field::Email,
        Field::Phone,
        Field::DepartureDate,
        Field::ReturnDate,
        Field::AccommodationPreference,
        Field::SpecialRequests,
        Field::HealthDeclaration,
        Field::EmergencyContact,
        Field::MedicalConditions,
    ];

    /// Label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Nationality => "Nationality",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::DepartureDate => "Departure Date",
            Self::ReturnDate => "Return Date",
            Self::AccommodationPreference => "Accommodation Preference",
            Self::SpecialRequests => "Special Requests or Preferences",
            Self::HealthDeclaration => "I declare I am healthy and fit for space travel.",
            Self::EmergencyContact => "Emergency Contact Information",
            Self::MedicalConditions => "Any Medical Conditions (Optional)",
        }
    }

    /// Label used on the submission summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::DateOfBirth => "Date Of Birth",
            Self::Nationality => "Nationality",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::DepartureDate => "Departure Date",
            Self::ReturnDate => "Return Date",
            Self::AccommodationPreference => "Accommodation Preference",
            Self::SpecialRequests => "Special Requests",
            Self::HealthDeclaration => "Health Declaration",
            Self::EmergencyContact => "Emergency Contact",
            Self::MedicalConditions => "Medical Conditions",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FullName | Self::Nationality | Self::EmergencyContact => FieldKind::Text,
            Self::DateOfBirth | Self::DepartureDate | Self::ReturnDate => FieldKind::Date,
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
            Self::SpecialRequests | Self::MedicalConditions => FieldKind::Multiline,
            Self::AccommodationPreference => FieldKind::Choice,
            Self::HealthDeclaration => FieldKind::Checkbox,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::SpecialRequests | Self::MedicalConditions)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind() == FieldKind::Multiline
    }

    /// Whether the field takes typed characters
    pub fn accepts_text(&self) -> bool {
        !matches!(self.kind(), FieldKind::Choice | FieldKind::Checkbox)
    }
}

/// Accommodation options offered on stage 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    #[default]
    SpaceHotel,
    MartianBase,
}

impl Accommodation {
    pub const ALL: [Accommodation; 2] = [Accommodation::SpaceHotel, Accommodation::MartianBase];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpaceHotel => "Space Hotel",
            Self::MartianBase => "Martian Base",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::SpaceHotel => Self::MartianBase,
            Self::MartianBase => Self::SpaceHotel,
        }
    }

    pub fn prev(&self) -> Self {
        // Two options, so stepping back is the same as stepping forward
        self.next()
    }
}
