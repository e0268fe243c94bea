use crate::client::models::keys::Key;

#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button or keyboard shortcut.
    KeyPressed(Key),
    /// Answer of the service for the request with this ticket.
    CalculationFinished {
        ticket: u64,
        outcome: Result<f64, String>,
    },
    MemoryCleared,
    /// Status timer expiry; only the timer of the latest error clears the bar.
    ClearStatus(u64),
}
