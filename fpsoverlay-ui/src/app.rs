// Overlay application state
use crate::config::{OverlayConfig, WindowConfig};
use crate::labels::OverlayLabels;
use crate::ui::overlay_view::OverlayView;
use crate::ui::translucent::Translucent;
use fpsoverlay_core::{Detection, LabelUpdate, UpdateReceiver};
use iced::futures::future;
use iced::keyboard::{self, key::Named, Key};
use iced::window::{self, Level, Position};
use iced::{
    executor, subscription, theme, Application, Command, Element, Point, Settings, Size,
    Subscription, Theme,
};

#[derive(Debug, Clone)]
pub enum Message {
    LabelUpdated(LabelUpdate),
    CloseRequested,
}

/// Everything the window needs at startup.
pub struct OverlayFlags {
    pub config: OverlayConfig,
    pub detection: Detection,
    /// Absent when no counting thread runs.
    pub updates: Option<UpdateReceiver>,
}

pub struct OverlayApp {
    labels: OverlayLabels,
    config: OverlayConfig,
    detection: Detection,
    updates: Option<UpdateReceiver>,
}

impl OverlayApp {
    pub fn labels(&self) -> &OverlayLabels {
        &self.labels
    }

    pub fn detection(&self) -> Detection {
        self.detection
    }
}

impl Application for OverlayApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = OverlayFlags;

    fn new(flags: OverlayFlags) -> (Self, Command<Message>) {
        (
            Self {
                labels: OverlayLabels::for_detection(flags.detection),
                config: flags.config,
                detection: flags.detection,
                updates: flags.updates,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        match self.detection.display_server() {
            Some(server) => format!("FPS Overlay ({})", server),
            None => "FPS Overlay".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::LabelUpdated(update) => {
                self.labels.apply(&update);
                Command::none()
            }
            Message::CloseRequested => window::close(window::Id::MAIN),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        OverlayView::view(&self.labels, &self.config.window)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn style(&self) -> theme::Application {
        theme::Application::Custom(Box::new(Translucent::new(
            self.config.window.background_alpha,
        )))
    }

    fn subscription(&self) -> Subscription<Message> {
        let close = keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(Message::CloseRequested),
            _ => None,
        });

        match &self.updates {
            Some(receiver) => Subscription::batch(vec![label_updates(receiver.clone()), close]),
            None => close,
        }
    }
}

/// Feed queued label updates into the event loop, oldest first.
fn label_updates(receiver: UpdateReceiver) -> Subscription<Message> {
    struct LabelUpdates;

    subscription::unfold(
        std::any::TypeId::of::<LabelUpdates>(),
        receiver,
        |receiver| async move {
            match receiver.recv_async().await {
                Some(update) => (Message::LabelUpdated(update), receiver),
                // Counting thread is gone; nothing more will arrive.
                None => future::pending().await,
            }
        },
    )
}

pub fn window_settings(config: &WindowConfig) -> window::Settings {
    window::Settings {
        size: Size::new(config.width, config.height),
        position: Position::Specific(Point::new(config.x, config.y)),
        resizable: false,
        decorations: config.decorations,
        transparent: true,
        level: if config.always_on_top {
            Level::AlwaysOnTop
        } else {
            Level::Normal
        },
        ..window::Settings::default()
    }
}

pub fn settings(
    config: OverlayConfig,
    detection: Detection,
    updates: Option<UpdateReceiver>,
) -> Settings<OverlayFlags> {
    Settings {
        window: window_settings(&config.window),
        ..Settings::with_flags(OverlayFlags {
            config,
            detection,
            updates,
        })
    }
}
