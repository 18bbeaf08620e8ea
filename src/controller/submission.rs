//! The submission flow: validate, then hand the record to a submit handler

use crate::auth::SubmitHandler;
use crate::validation::{validate, FieldValues, FormSchema, ValidationResult};
use anyhow::Result;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "submission in progress" flag.
///
/// Clones observe the same flag, so a render loop can watch a submission
/// running on another task.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    submitting: Arc<AtomicBool>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Raise the flag; it drops back when the returned guard is dropped
    pub(crate) fn begin(&self) -> SubmittingGuard {
        if self.submitting.swap(true, Ordering::SeqCst) {
            // Not prevented here: the submit trigger is expected to be disabled
            tracing::warn!("submission started while another one is in flight");
        }
        SubmittingGuard {
            state: self.clone(),
        }
    }
}

/// Resets the submitting flag on every exit path
#[derive(Debug)]
pub(crate) struct SubmittingGuard {
    state: SubmissionState,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.state.submitting.store(false, Ordering::SeqCst);
    }
}

/// Validate `values` and, if they pass, await `handler` with the record.
///
/// `state` is marked as submitting as soon as this is called, before the
/// returned future is polled, and cleared when the future completes or is
/// dropped. An `Invalid` result is returned as `Ok` without calling the
/// handler; a handler error is returned as-is after the flag is cleared.
///
/// Callers must not start a second submission on the same `state` while
/// one is in flight.
pub fn submit<'a, H>(
    schema: &'a FormSchema,
    values: &'a FieldValues,
    state: &SubmissionState,
    handler: &'a H,
) -> impl Future<Output = Result<ValidationResult>> + Send + 'a
where
    H: SubmitHandler + ?Sized,
{
    let guard = state.begin();
    settle(guard, schema, values, handler)
}

pub(crate) async fn settle<H>(
    guard: SubmittingGuard,
    schema: &FormSchema,
    values: &FieldValues,
    handler: &H,
) -> Result<ValidationResult>
where
    H: SubmitHandler + ?Sized,
{
    let _guard = guard;

    let result = validate(schema, values);
    let record = match &result {
        ValidationResult::Valid(record) => record.clone(),
        ValidationResult::Invalid(errors) => {
            tracing::debug!(
                form = schema.name(),
                invalid_fields = errors.len(),
                "submission stopped by validation"
            );
            return Ok(result);
        }
    };

    tracing::info!(form = schema.name(), "submitting");
    if let Err(e) = handler.on_valid(record).await {
        tracing::warn!(form = schema.name(), error = %e, "submission failed");
        return Err(e);
    }
    tracing::info!(form = schema.name(), "submission succeeded");
    Ok(result)
}
