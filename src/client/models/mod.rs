pub mod calculator_state;
pub mod keys;
pub mod messages;
