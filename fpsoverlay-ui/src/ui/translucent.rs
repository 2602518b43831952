// Translucent black window background
use iced::application::{Appearance, StyleSheet};
use iced::{Color, Theme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translucent {
    pub alpha: f32,
}

impl Translucent {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}

impl StyleSheet for Translucent {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> Appearance {
        Appearance {
            background_color: Color::from_rgba(0.0, 0.0, 0.0, self.alpha),
            text_color: style.palette().text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_black_with_alpha() {
        let appearance = Translucent::new(0.18).appearance(&Theme::Dark);
        assert_eq!(appearance.background_color, Color::from_rgba(0.0, 0.0, 0.0, 0.18));
        assert_eq!(appearance.text_color, Theme::Dark.palette().text);
    }
}
