pub mod calculator_service;
pub mod remote_calculator;
