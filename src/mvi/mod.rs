//! Model-View-Intent primitives shared by the form and the terminal UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every change to the product form goes through a reducer, so the four
//! outcomes of a submission can be exercised without a terminal or a network.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
