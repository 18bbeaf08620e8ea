//! TaskHub forms engine
//!
//! Schema-driven validation and submission for the TaskHub sign-in and
//! sign-up screens. The terminal front-end in `main.rs` is one consumer;
//! nothing in this library touches the terminal.
//!
//! - [`validation`]: field rules, cross-field rules, `validate`
//! - [`controller`]: per-form state and the async submission flow
//! - [`forms`]: the concrete sign-in and sign-up definitions
//! - [`auth`]: the submit handler boundary and a simulated auth service
//! - [`config`]: user configuration

pub mod auth;
pub mod config;
pub mod controller;
pub mod forms;
pub mod validation;
