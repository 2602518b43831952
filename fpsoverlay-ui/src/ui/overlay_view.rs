//! Overlay content
//!
//! FPS line above the stats block, nothing else.

use crate::app::Message;
use crate::config::WindowConfig;
use crate::labels::OverlayLabels;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

pub struct OverlayView;

impl OverlayView {
    pub fn view<'a>(labels: &'a OverlayLabels, window: &WindowConfig) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(window.spacing)
            .push(Text::new(labels.fps.as_str()).size(16))
            .push(Text::new(labels.stats.as_str()).size(14));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(window.padding)
            .into()
    }
}
