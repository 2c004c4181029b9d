//! The product-creation form: validation and the submission state machine.

mod controller;
mod intent;
mod reducer;
mod state;
mod validation;

pub use controller::{PendingSubmission, ProductForm};
pub use intent::FormIntent;
pub use reducer::{classify, FormReducer, Resolution};
pub use state::{ApiError, FormFields, FormState, Notice, Phase, ProductType};
pub use validation::{validate_all, validate_field, Field, FieldErrors};
