use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Element, Length};

use crate::client::gui::widgets::display;
use crate::client::models::calculator_state::CalculatorState;
use crate::client::models::keys::Key;
use crate::client::models::messages::Message;
use crate::common::models::Operator;

const DIGIT_ROWS: [[char; 3]; 3] = [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']];

fn key_button(label: String, key: Key, style: iced::theme::Button, enabled: bool) -> Element<'static, Message> {
    let button = Button::new(
        Container::new(
            Text::new(label)
                .size(20)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(style)
    .width(Length::Fill)
    .padding([12, 16]);

    if enabled {
        button.on_press(Message::KeyPressed(key)).into()
    } else {
        button.into()
    }
}

fn digit_button(d: char, enabled: bool) -> Element<'static, Message> {
    key_button(d.to_string(), Key::Digit(d), iced::theme::Button::Secondary, enabled)
}

/// Display plus the full keypad. Every key except AC is disabled while a
/// calculation is in flight.
pub fn view(state: &CalculatorState) -> Element<'_, Message> {
    let enabled = !state.is_loading();

    let mut digits = Column::new().spacing(6).width(Length::FillPortion(3));
    for row in DIGIT_ROWS {
        let mut buttons = Row::new().spacing(6);
        for d in row {
            buttons = buttons.push(digit_button(d, enabled));
        }
        digits = digits.push(buttons);
    }
    digits = digits.push(
        Row::new()
            .spacing(6)
            .push(digit_button('0', enabled))
            .push(key_button(".".to_string(), Key::Decimal, iced::theme::Button::Secondary, enabled))
            .push(Container::new(Text::new("")).width(Length::Fill)),
    );

    let mut operators = Column::new().spacing(6).width(Length::FillPortion(1));
    for op in Operator::ALL {
        let style = if op == Operator::Equals {
            iced::theme::Button::Positive
        } else {
            iced::theme::Button::Primary
        };
        operators = operators.push(key_button(op.symbol().to_string(), Key::Operator(op), style, enabled));
    }

    let clear_row = Row::new()
        .spacing(6)
        .push(key_button("AC".to_string(), Key::ClearAll, iced::theme::Button::Destructive, true))
        .push(key_button("CE".to_string(), Key::ClearEntry, iced::theme::Button::Destructive, enabled));

    Column::new()
        .spacing(12)
        .push(display::view(state.display()))
        .push(Row::new().spacing(6).push(digits).push(operators))
        .push(clear_row)
        .into()
}
