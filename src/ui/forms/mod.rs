//! Form rendering module
//!
//! - `field_renderer`: one input with its error line
//! - `auth_form`: the sign-in and sign-up cards

mod auth_form;
mod field_renderer;

pub use auth_form::draw_auth_form;
