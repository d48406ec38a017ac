// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Declarative interception pipeline around service invocations.
//!
//! [`intercept`] wraps a named operation with ordered stages: an entry record
//! is logged unconditionally, the operation runs, and then either an exit
//! record is logged or the failure is classified against the static
//! kind → status table, logged at error level, and re-surfaced as a uniform
//! `(status, message)` response. The failure is translated, not swallowed,
//! and the message is always forwarded verbatim — classification affects the
//! status only.

use std::future::Future;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::error::{status_for, AppError};

/// Body used when a failure carries no message of its own.
const FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// How an intercepted invocation ended (or that it just began).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Entered,
    Completed,
    Failed,
}

/// Ephemeral record of one pipeline stage; logged, never persisted.
#[derive(Debug, Clone)]
pub struct InterceptionRecord {
    pub operation: &'static str,
    pub at: DateTime<Utc>,
    pub outcome: Outcome,
}

impl InterceptionRecord {
    fn new(operation: &'static str, outcome: Outcome) -> Self {
        Self {
            operation,
            at: Utc::now(),
            outcome,
        }
    }

    pub fn entered(operation: &'static str) -> Self {
        Self::new(operation, Outcome::Entered)
    }

    pub fn completed(operation: &'static str) -> Self {
        Self::new(operation, Outcome::Completed)
    }

    pub fn failed(operation: &'static str) -> Self {
        Self::new(operation, Outcome::Failed)
    }

    pub fn log(&self) {
        match self.outcome {
            Outcome::Entered => {
                tracing::info!(at = %self.at, "Entering method: {}", self.operation);
            }
            Outcome::Completed => {
                tracing::info!(at = %self.at, "Exiting method: {}", self.operation);
            }
            // The error-level entry with the failure message is emitted by
            // the classification stage.
            Outcome::Failed => {
                tracing::debug!(at = %self.at, "Exiting method with failure: {}", self.operation);
            }
        }
    }
}

/// A classified failure: the mapped status plus the forwarded message.
///
/// This is the single point where failures become HTTP responses. The body is
/// plain text equal to the failure's message (or a fixed fallback when
/// empty).
#[derive(Debug)]
pub struct FailureResponse {
    pub status: StatusCode,
    pub message: String,
}

impl FailureResponse {
    /// Classify a failure: look up the status for its kind and log the
    /// message at error level.
    pub fn from_failure(err: &AppError) -> Self {
        let mut message = err.to_string();
        if message.is_empty() {
            message = FALLBACK_MESSAGE.to_string();
        }
        tracing::error!("{message}");
        Self {
            status: status_for(err.kind()),
            message,
        }
    }
}

/// Lets gate checks short-circuit handlers with `?` while still passing
/// through the one classification point.
impl From<AppError> for FailureResponse {
    fn from(err: AppError) -> Self {
        Self::from_failure(&err)
    }
}

impl IntoResponse for FailureResponse {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Wrap a named operation invocation with the interception stages.
pub async fn intercept<T, F>(operation: &'static str, invoke: F) -> Result<T, FailureResponse>
where
    F: Future<Output = Result<T, AppError>>,
{
    InterceptionRecord::entered(operation).log();

    match invoke.await {
        Ok(value) => {
            InterceptionRecord::completed(operation).log();
            Ok(value)
        }
        Err(err) => {
            InterceptionRecord::failed(operation).log();
            Err(FailureResponse::from_failure(&err))
        }
    }
}
