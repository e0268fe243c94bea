#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use remote_calculator::client::services::calculator_service::{CalculatorBackend, ServiceError};
use remote_calculator::common::models::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Computes the answer locally.
    Arithmetic,
    /// Answers with an empty result.
    Empty,
    /// Fails as if the transport broke.
    Failing,
}

/// In-memory stand-in for the calculator service that records every call.
pub struct RecordingBackend {
    mode: Mutex<Mode>,
    calls: Mutex<Vec<(f64, f64, Operator)>>,
    clears: AtomicUsize,
}

impl RecordingBackend {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Mutex::new(mode),
            calls: Mutex::new(Vec::new()),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn calls(&self) -> Vec<(f64, f64, Operator)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalculatorBackend for RecordingBackend {
    async fn calculate(&self, a: f64, b: f64, operator: Operator) -> Result<Vec<f64>, ServiceError> {
        self.calls.lock().unwrap().push((a, b, operator));
        let mode = *self.mode.lock().unwrap();
        match mode {
            Mode::Failing => Err(ServiceError::Remote("simulated failure".to_string())),
            Mode::Empty => Ok(vec![]),
            Mode::Arithmetic => Ok(match operator {
                Operator::Add => vec![a + b],
                Operator::Subtract => vec![a - b],
                Operator::Multiply => vec![a * b],
                Operator::Divide if b == 0.0 => vec![],
                Operator::Divide => vec![a / b],
                Operator::Equals => vec![b],
            }),
        }
    }

    async fn clear_memory(&self) -> Result<(), ServiceError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
