//! Form controller
//!
//! Drives a submission attempt through
//! `Idle -> Validating -> {Invalid | Submitting -> {Success | Failure}} -> Idle`.
//! The only suspension point is the submit handler.

mod form_controller;
mod submission;

pub use form_controller::FormController;
pub use submission::{submit, SubmissionState};
