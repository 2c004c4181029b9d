use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mvi::UiState;

use super::validation::{Field, FieldErrors};

/// Raw user input. This is also the JSON payload posted to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub product_type: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            product_type: product_type.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Size => &self.size,
            Field::Type => &self.product_type,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Size => self.size = value,
            Field::Type => self.product_type = value,
        }
    }
}

/// Options offered by the type selector. The empty placeholder is not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Electronic,
    Furniture,
    Clothing,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Electronic,
        ProductType::Furniture,
        ProductType::Clothing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Electronic => "electronic",
            ProductType::Furniture => "furniture",
            ProductType::Clothing => "clothing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Next selector value after `current`, cycling through the placeholder.
    ///
    /// `forward == false` walks the list backwards.
    pub fn cycle(current: &str, forward: bool) -> &'static str {
        // Slot 0 is the placeholder.
        let slots = Self::ALL.len() + 1;
        let index = Self::parse(current)
            .and_then(|kind| Self::ALL.iter().position(|k| *k == kind))
            .map_or(0, |pos| pos + 1);
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        match next {
            0 => "",
            n => Self::ALL[n - 1].as_str(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the form is within one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
    Settled,
}

/// Failures reported by the backend, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Status 400.
    InvalidRequest,
    /// Status 404, 408 or a transport failure.
    Connection,
}

impl ApiError {
    pub fn message(self) -> &'static str {
        match self {
            // Wording kept as the backend contract expects it.
            ApiError::InvalidRequest => "Invalid request fields name size and size are required",
            ApiError::Connection => "connection error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the latest submission. `Saved` and `Failed` never coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Failed(ApiError),
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Product saved",
            Notice::Failed(error) => error.message(),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub phase: Phase,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
    /// Number of the latest attempt handed to the submission service.
    pub attempt: u64,
}

impl UiState for FormState {}

impl FormState {
    /// True while a submission is being validated or is in flight.
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Validating | Phase::Sending)
    }

    /// The Submit trigger is disabled exactly while sending.
    pub fn is_trigger_enabled(&self) -> bool {
        !self.is_sending()
    }

    /// Attempt number awaiting an outcome, if any.
    pub fn in_flight_attempt(&self) -> Option<u64> {
        (self.phase == Phase::Sending).then_some(self.attempt)
    }

    pub fn api_error(&self) -> Option<ApiError> {
        match self.notice {
            Some(Notice::Failed(error)) => Some(error),
            _ => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.notice == Some(Notice::Saved)
    }
}
