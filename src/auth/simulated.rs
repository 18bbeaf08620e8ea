//! Simulated authentication service
//!
//! Stands in for a remote endpoint: waits for a fixed delay, then accepts
//! the submission or fails it with a configured error.

use super::traits::SubmitHandler;
use crate::forms::FormKind;
use crate::validation::Record;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Failures the simulated service can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with email {email} already exists")]
    DuplicateAccount { email: String },
}

/// Which failure to simulate, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedFailure {
    InvalidCredentials,
    DuplicateAccount,
}

impl SimulatedFailure {
    fn to_error(self, email: &str) -> AuthError {
        match self {
            SimulatedFailure::InvalidCredentials => AuthError::InvalidCredentials,
            SimulatedFailure::DuplicateAccount => AuthError::DuplicateAccount {
                email: email.to_string(),
            },
        }
    }
}

/// Submit handler that sleeps, then succeeds or fails as configured
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    kind: FormKind,
    delay: Duration,
    failure: Option<SimulatedFailure>,
}

impl SimulatedAuth {
    pub fn new(kind: FormKind, delay: Duration) -> Self {
        Self {
            kind,
            delay,
            failure: None,
        }
    }

    /// Fail every submission with `failure` after the delay
    pub fn failing_with(mut self, failure: Option<SimulatedFailure>) -> Self {
        self.failure = failure;
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }
}

#[async_trait]
impl SubmitHandler for SimulatedAuth {
    async fn on_valid(&self, record: Record) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        let email = record.text("email").unwrap_or_default();
        if let Some(failure) = self.failure {
            tracing::warn!(form = ?self.kind, email, "simulated {:?}", failure);
            return Err(failure.to_error(email).into());
        }

        match self.kind {
            FormKind::SignIn => tracing::info!(email, "signed in"),
            FormKind::SignUp => tracing::info!(email, "account created"),
        }
        Ok(())
    }
}
