// Numeric display of the calculator
use iced::widget::{Container, Text};
use iced::{Color, Element, Length};

use crate::client::models::messages::Message;

const DISPLAY_BG: Color = Color::from_rgb(0.88, 0.88, 0.88);
const DISPLAY_TEXT: Color = Color::from_rgb(0.1, 0.1, 0.1);

fn display_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(DISPLAY_BG)),
        text_color: Some(DISPLAY_TEXT),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 4.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: iced::Color::TRANSPARENT,
        },
    }
}

pub fn view(text: &str) -> Element<'_, Message> {
    Container::new(
        Text::new(text)
            .size(34)
            .style(DISPLAY_TEXT)
            .horizontal_alignment(iced::alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fixed(64.0))
    .padding([12, 16])
    .align_x(iced::alignment::Horizontal::Right)
    .center_y()
    .style(iced::theme::Container::Custom(Box::new(display_appearance)))
    .into()
}
