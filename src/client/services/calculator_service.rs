use std::sync::Arc;

use async_trait::async_trait;
use log::{error, warn};

use crate::common::models::Operator;

/// Errors raised while talking to the calculator service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to connect to calculator service at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("remote service error: {0}")]
    Remote(String),

    #[error("connection to calculator service closed")]
    Closed,
}

/// The external arithmetic service.
///
/// `calculate` answers with a sequence whose first element is the result; an
/// empty sequence means the service could not compute one.
#[async_trait]
pub trait CalculatorBackend: Send + Sync {
    async fn calculate(&self, a: f64, b: f64, operator: Operator) -> Result<Vec<f64>, ServiceError>;

    /// Best-effort reset of any memory the service keeps.
    async fn clear_memory(&self) -> Result<(), ServiceError>;
}

#[async_trait]
impl<T: CalculatorBackend + ?Sized> CalculatorBackend for Arc<T> {
    async fn calculate(&self, a: f64, b: f64, operator: Operator) -> Result<Vec<f64>, ServiceError> {
        (**self).calculate(a, b, operator).await
    }

    async fn clear_memory(&self) -> Result<(), ServiceError> {
        (**self).clear_memory().await
    }
}

/// Picks the value to show from a service answer. Empty answers count as
/// failures; the error side describes what went wrong.
pub fn result_or_reason(outcome: Result<Vec<f64>, ServiceError>) -> Result<f64, String> {
    match outcome {
        Ok(values) => values
            .first()
            .copied()
            .ok_or_else(|| "calculator service returned an empty result".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Collapses a service answer into the value to show. Transport errors,
/// remote errors and empty answers all become `None`.
pub fn first_result(outcome: Result<Vec<f64>, ServiceError>) -> Option<f64> {
    match result_or_reason(outcome) {
        Ok(value) => Some(value),
        Err(reason) => {
            error!("Calculation error: {}", reason);
            None
        }
    }
}

/// Sends the clear signal and only logs a failure.
pub async fn clear_memory_best_effort<B: CalculatorBackend + ?Sized>(backend: &B) {
    if let Err(e) = backend.clear_memory().await {
        warn!("Failed to clear calculator memory: {}", e);
    }
}
