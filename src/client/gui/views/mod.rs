pub mod keypad;
pub mod status_bar;
