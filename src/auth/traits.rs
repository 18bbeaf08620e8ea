//! Trait abstraction for the submit handler to enable mocking in tests

use crate::validation::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a validated record once a form passes validation.
///
/// Resolving means the submission succeeded. Any error is handed back
/// unchanged to whoever started the submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn on_valid(&self, record: Record) -> Result<()>;
}
