use iced::widget::{Container, Row, Space, Text};
use iced::{Element, Length};

use crate::client::models::messages::Message;

const ERROR_COLOR: iced::Color = iced::Color {
    r: 1.0,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

/// A failure reported by the service, shown until it times out or AC is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shows only the latest status message as an alert bar.
pub fn view(messages: &[StatusMessage]) -> Element<'_, Message> {
    let Some(status) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    Container::new(
        Row::new().push(
            Text::new(&status.message)
                .size(14)
                .style(iced::Color::WHITE),
        ),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        move |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(ERROR_COLOR)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 0.0),
                blur_radius: 0.0,
                color: iced::Color::TRANSPARENT,
            },
        },
    )))
    .into()
}
