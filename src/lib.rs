//! Calculator front end that delegates arithmetic to a remote service.

pub mod client;
pub mod common;
pub mod utils;
