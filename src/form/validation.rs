//! Required-field validation for the product form.

use std::fmt;

use super::state::FormFields;

/// The three inputs of the product form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Size,
    Type,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Size, Field::Type];

    /// Label shown next to the input and used as the wire key.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Size => "size",
            Field::Type => "type",
        }
    }

    /// Message shown beneath the field when it is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "the field name is required",
            Field::Size => "the field size is required",
            Field::Type => "the field type is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the required-message for `field` when `value` is empty.
///
/// Whitespace is content: only a zero-length value is rejected.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(field.required_message())
    } else {
        None
    }
}

/// Validates every field independently. There are no cross-field rules.
pub fn validate_all(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, fields.get(field)));
    }
    errors
}

/// Per-field error text. `None` means the field is currently valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub size: Option<&'static str>,
    pub product_type: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Size => self.size,
            Field::Type => self.product_type,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::Name => self.name = error,
            Field::Size => self.size = error,
            Field::Type => self.product_type = error,
        }
    }

    pub fn has_any(&self) -> bool {
        Field::ALL.iter().any(|field| self.get(*field).is_some())
    }

    /// Visible messages in focus order.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        Field::ALL.iter().filter_map(|field| self.get(*field))
    }
}
