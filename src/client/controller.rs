//! Async driver that pairs the input state machine with a backend.
//!
//! Every method runs to completion, including the remote call, so callers
//! that await one press before sending the next never overlap requests.

use log::info;

use crate::client::models::calculator_state::{CalculationRequest, CalculatorState, Effect};
use crate::client::models::keys::Key;
use crate::client::services::calculator_service::{
    clear_memory_best_effort, first_result, CalculatorBackend,
};
use crate::common::models::Operator;

pub struct CalculatorController<B> {
    state: CalculatorState,
    backend: B,
}

impl<B: CalculatorBackend> CalculatorController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: CalculatorState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn digit(&mut self, d: char) {
        self.state.digit(d);
    }

    pub fn decimal(&mut self) {
        self.state.decimal();
    }

    pub async fn operator(&mut self, op: Operator) {
        if let Some(request) = self.state.operator(op) {
            self.run(request).await;
        }
    }

    pub async fn clear_all(&mut self) {
        let effect = self.state.clear_all();
        self.apply(effect).await;
    }

    pub fn clear_entry(&mut self) {
        self.state.clear_entry();
    }

    pub async fn press(&mut self, key: Key) {
        if let Some(effect) = self.state.press(key) {
            self.apply(effect).await;
        }
    }

    async fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Calculate(request) => self.run(request).await,
            Effect::ClearMemory => {
                info!("Clearing calculator memory");
                clear_memory_best_effort(&self.backend).await;
            }
        }
    }

    async fn run(&mut self, request: CalculationRequest) {
        let outcome = self
            .backend
            .calculate(request.a, request.b, request.operator)
            .await;
        self.state.complete(request.ticket, first_result(outcome));
    }
}
