use serde::{Deserialize, Serialize};

/// Literal shown on the display when a calculation fails.
pub const ERROR_MARKER: &str = "Error";

/// Shown in place of the value while a remote calculation is in flight.
pub const BUSY_INDICATOR: &str = "…";

/// Operator keys. `Equals` travels to the service like any other operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "=")]
    Equals,
}

impl Operator {
    /// Keypad order of the operator column.
    pub const ALL: [Operator; 5] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
        Operator::Equals,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equals => "=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Formats a service result the way the display shows it (`8.0` -> `8`).
///
/// Magnitudes from `1e21` up or below `1e-6` switch to exponent notation
/// (`1e+21`, `1.5e-7`), negative zero shows as `0` and infinities are spelled out.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    value.to_string()
}
