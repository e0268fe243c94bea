//! Input state machine of the calculator.
//!
//! Every button press is a transition on [`Phase`]. The machine never talks to
//! the service itself: operator presses that need arithmetic hand back a
//! [`CalculationRequest`], and the owner reports the answer through
//! [`CalculatorState::complete`].

use log::debug;

use crate::client::models::keys::Key;
use crate::common::models::{format_number, Operator, BUSY_INDICATOR, ERROR_MARKER};

/// A remote calculation the owner of the state must perform.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub ticket: u64,
    pub a: f64,
    pub b: f64,
    pub operator: Operator,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Calculate(CalculationRequest),
    ClearMemory,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Typing the first operand.
    Entering { entry: String },
    /// An operator was chosen; the next digit starts a new number.
    Awaiting {
        value: f64,
        operator: Operator,
        shown: String,
    },
    /// Typing the second operand.
    EnteringSecond {
        value: f64,
        operator: Operator,
        entry: String,
    },
    /// Waiting for the service. `next_operator` becomes pending once it answers.
    Computing {
        request: CalculationRequest,
        next_operator: Operator,
    },
    /// Last calculation failed; the pending value is gone.
    Failed { operator: Operator },
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Entering {
            entry: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    phase: Phase,
    next_ticket: u64,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to render: the current number, the error marker, or the busy indicator.
    pub fn display(&self) -> &str {
        match &self.phase {
            Phase::Entering { entry } | Phase::EnteringSecond { entry, .. } => entry,
            Phase::Awaiting { shown, .. } => shown,
            Phase::Computing { .. } => BUSY_INDICATOR,
            Phase::Failed { .. } => ERROR_MARKER,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Computing { .. })
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        matches!(self.phase, Phase::Awaiting { .. } | Phase::Failed { .. })
    }

    pub fn pending_value(&self) -> Option<f64> {
        match &self.phase {
            Phase::Awaiting { value, .. } | Phase::EnteringSecond { value, .. } => Some(*value),
            Phase::Computing { request, .. } => Some(request.a),
            Phase::Entering { .. } | Phase::Failed { .. } => None,
        }
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match &self.phase {
            Phase::Awaiting { operator, .. }
            | Phase::EnteringSecond { operator, .. }
            | Phase::Failed { operator } => Some(*operator),
            Phase::Computing { request, .. } => Some(request.operator),
            Phase::Entering { .. } => None,
        }
    }

    /// Applies a key press and returns the side effect it requires, if any.
    pub fn press(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Digit(d) => {
                self.digit(d);
                None
            }
            Key::Decimal => {
                self.decimal();
                None
            }
            Key::Operator(op) => self.operator(op).map(Effect::Calculate),
            Key::ClearAll => Some(self.clear_all()),
            Key::ClearEntry => {
                self.clear_entry();
                None
            }
        }
    }

    /// Returns false when the press was ignored.
    pub fn digit(&mut self, d: char) -> bool {
        if !d.is_ascii_digit() {
            return false;
        }
        match &mut self.phase {
            Phase::Entering { entry } | Phase::EnteringSecond { entry, .. } => {
                if entry == "0" {
                    entry.clear();
                }
                entry.push(d);
            }
            Phase::Awaiting { value, operator, .. } => {
                self.phase = Phase::EnteringSecond {
                    value: *value,
                    operator: *operator,
                    entry: d.to_string(),
                };
            }
            Phase::Failed { .. } => {
                self.phase = Phase::Entering {
                    entry: d.to_string(),
                };
            }
            Phase::Computing { .. } => {
                debug!("Ignoring digit {} while a calculation is in flight", d);
                return false;
            }
        }
        true
    }

    pub fn decimal(&mut self) -> bool {
        match &mut self.phase {
            Phase::Entering { entry } | Phase::EnteringSecond { entry, .. } => {
                if !entry.contains('.') {
                    entry.push('.');
                }
            }
            Phase::Awaiting { value, operator, .. } => {
                self.phase = Phase::EnteringSecond {
                    value: *value,
                    operator: *operator,
                    entry: "0.".to_string(),
                };
            }
            Phase::Failed { .. } => {
                self.phase = Phase::Entering {
                    entry: "0.".to_string(),
                };
            }
            Phase::Computing { .. } => {
                debug!("Ignoring decimal point while a calculation is in flight");
                return false;
            }
        }
        true
    }

    /// Commits the current number. Returns the calculation to run when an
    /// operator was already pending.
    pub fn operator(&mut self, op: Operator) -> Option<CalculationRequest> {
        let (a, b, pending) = match &self.phase {
            Phase::Entering { entry } => {
                self.phase = Phase::Awaiting {
                    value: parse_operand(entry),
                    operator: op,
                    shown: entry.clone(),
                };
                return None;
            }
            Phase::Failed { .. } => {
                // The error marker is committed like any shown number and reads as NaN.
                self.phase = Phase::Awaiting {
                    value: parse_operand(ERROR_MARKER),
                    operator: op,
                    shown: ERROR_MARKER.to_string(),
                };
                return None;
            }
            Phase::Computing { .. } => {
                debug!("Ignoring operator {} while a calculation is in flight", op);
                return None;
            }
            Phase::Awaiting {
                value,
                operator,
                shown,
            } => (*value, parse_operand(shown), *operator),
            Phase::EnteringSecond {
                value,
                operator,
                entry,
            } => (*value, parse_operand(entry), *operator),
        };

        self.next_ticket += 1;
        let request = CalculationRequest {
            ticket: self.next_ticket,
            a,
            b,
            operator: pending,
        };
        self.phase = Phase::Computing {
            request: request.clone(),
            next_operator: op,
        };
        Some(request)
    }

    /// Applies the answer of the service. `None` means the call failed or
    /// returned no value. Stale tickets are dropped; returns whether the
    /// outcome was applied.
    pub fn complete(&mut self, ticket: u64, result: Option<f64>) -> bool {
        let next_operator = match &self.phase {
            Phase::Computing {
                request,
                next_operator,
            } if request.ticket == ticket => *next_operator,
            _ => {
                debug!("Dropping stale calculation result (ticket {})", ticket);
                return false;
            }
        };
        self.phase = match result {
            Some(value) => Phase::Awaiting {
                value,
                operator: next_operator,
                shown: format_number(value),
            },
            None => Phase::Failed {
                operator: next_operator,
            },
        };
        true
    }

    /// Full reset. Always asks for the service memory to be cleared and
    /// abandons any calculation in flight.
    pub fn clear_all(&mut self) -> Effect {
        self.phase = Phase::default();
        Effect::ClearMemory
    }

    /// Resets the shown number only; a pending operation survives.
    pub fn clear_entry(&mut self) -> bool {
        match &self.phase {
            Phase::Entering { .. } | Phase::Failed { .. } => {
                self.phase = Phase::default();
            }
            Phase::Awaiting {
                value, operator, ..
            }
            | Phase::EnteringSecond {
                value, operator, ..
            } => {
                self.phase = Phase::EnteringSecond {
                    value: *value,
                    operator: *operator,
                    entry: "0".to_string(),
                };
            }
            Phase::Computing { .. } => {
                debug!("Ignoring clear-entry while a calculation is in flight");
                return false;
            }
        }
        true
    }
}

// Display text is digits with at most one '.', or a formatted f64; unparsable text reads as NaN.
fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}
