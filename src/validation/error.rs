//! Validation error types

use crate::state::Field;
use std::collections::BTreeMap;
use thiserror::Error;

/// A user-facing problem with a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field left empty
    #[error("{0}")]
    Required(&'static str),
    /// Value present but malformed
    #[error("{0}")]
    InvalidFormat(&'static str),
    /// Value conflicts with another field or with today's date
    #[error("{0}")]
    CrossField(&'static str),
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required(m) | Self::InvalidFormat(m) | Self::CrossField(m) => m,
        }
    }
}

/// Sparse field -> error map, ordered by form position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Drop the error for one field. Returns whether there was one.
    pub fn remove(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Earliest field in form order that has an error
    pub fn first(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }
}
