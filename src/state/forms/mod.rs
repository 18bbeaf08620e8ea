//! Form screen state
//!
//! Field descriptors and per-screen state for the sign-in and sign-up
//! views. Validation and submission live in `taskhub::controller`.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{AuthForm, Form};
