use std::sync::Arc;

use iced::keyboard;
use iced::widget::{Column, Container};
use iced::{Application, Command, Element, Length, Subscription, Theme};
use log::{error, info};

use crate::client::gui::views::{keypad, status_bar};
use crate::client::gui::views::status_bar::StatusMessage;
use crate::client::models::calculator_state::{CalculationRequest, CalculatorState, Effect};
use crate::client::models::keys::Key;
use crate::client::models::messages::Message;
use crate::client::services::calculator_service::{
    clear_memory_best_effort, result_or_reason, CalculatorBackend,
};
use crate::common::models::Operator;

/// How long an error stays in the status bar.
const STATUS_TIMEOUT_MS: u64 = 4000;

pub struct AppFlags {
    pub backend: Arc<dyn CalculatorBackend>,
    pub service_addr: String,
}

pub struct CalculatorApp {
    pub state: CalculatorState,
    pub backend: Arc<dyn CalculatorBackend>,
    pub service_addr: String,
    pub status: Vec<StatusMessage>,
    status_seq: u64,
}

impl CalculatorApp {
    fn calculate(&self, request: CalculationRequest) -> Command<Message> {
        let backend = self.backend.clone();
        let ticket = request.ticket;
        Command::perform(
            async move {
                let outcome = backend
                    .calculate(request.a, request.b, request.operator)
                    .await;
                result_or_reason(outcome)
            },
            move |outcome| Message::CalculationFinished { ticket, outcome },
        )
    }

    fn clear_memory(&self) -> Command<Message> {
        let backend = self.backend.clone();
        Command::perform(
            async move { clear_memory_best_effort(backend.as_ref()).await },
            |()| Message::MemoryCleared,
        )
    }

    /// Shows an error and returns the sequence number of its expiry timer.
    fn report_error(&mut self, reason: String) -> u64 {
        self.status_seq += 1;
        self.status.push(StatusMessage::error(reason));
        self.status_seq
    }

    fn expire_status(&mut self, seq: u64) -> bool {
        if seq != self.status_seq {
            return false;
        }
        self.status.clear();
        true
    }

    fn apply(&mut self, effect: Option<Effect>) -> Command<Message> {
        match effect {
            Some(Effect::Calculate(request)) => self.calculate(request),
            Some(Effect::ClearMemory) => {
                self.status.clear();
                self.clear_memory()
            }
            None => Command::none(),
        }
    }
}

impl Application for CalculatorApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Calculator GUI using service at {}", flags.service_addr);
        let app = CalculatorApp {
            state: CalculatorState::new(),
            backend: flags.backend,
            service_addr: flags.service_addr,
            status: Vec::new(),
            status_seq: 0,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        format!("Calculator ({})", self.service_addr)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::KeyPressed(key) => {
                let effect = self.state.press(key);
                self.apply(effect)
            }
            Message::CalculationFinished { ticket, outcome } => {
                let failure = outcome.as_ref().err().cloned();
                if !self.state.complete(ticket, outcome.ok()) {
                    return Command::none();
                }
                match failure {
                    Some(reason) => {
                        error!("Calculation error: {}", reason);
                        let seq = self.report_error(reason);
                        Command::perform(
                            async {
                                tokio::time::sleep(tokio::time::Duration::from_millis(STATUS_TIMEOUT_MS)).await;
                            },
                            move |()| Message::ClearStatus(seq),
                        )
                    }
                    None => Command::none(),
                }
            }
            Message::MemoryCleared => Command::none(),
            Message::ClearStatus(seq) => {
                self.expire_status(seq);
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| shortcut(&key).map(Message::KeyPressed))
    }

    fn view(&self) -> Element<Message> {
        Container::new(
            Column::new()
                .spacing(12)
                .push(keypad::view(&self.state))
                .push(status_bar::view(&self.status)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Keyboard shortcuts: digits, `.`, operators, Enter for `=`, Escape for AC,
/// Backspace/Delete for clear-entry.
pub fn shortcut(key: &keyboard::Key) -> Option<Key> {
    use keyboard::key::Named;
    match key {
        keyboard::Key::Named(Named::Enter) => Some(Key::Operator(Operator::Equals)),
        keyboard::Key::Named(Named::Escape) => Some(Key::ClearAll),
        keyboard::Key::Named(Named::Backspace | Named::Delete) => Some(Key::ClearEntry),
        keyboard::Key::Character(c) => c.as_str().parse().ok(),
        _ => None,
    }
}
