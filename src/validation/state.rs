//! Per-field error map.

use crate::domain::{Field, FieldError};
use std::collections::BTreeMap;

/// Current error of every field; a field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of validating `field`.
    pub fn set(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// The error currently attached to `field`, if any.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Inline message for `field`; empty when the field is valid.
    pub fn message(&self, field: Field) -> String {
        self.error(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields that currently carry an error, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
