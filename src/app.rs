// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use crate::config::Config;
use crate::fl;
use crate::form::{render_field, FieldId};
use crate::host::{load_layout_or_default, HostScreen};
use crate::keyboard::{render_keyboard, KeyboardMessage};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::widget::Stack;
use cosmic::iced::{event, mouse, touch, window, Event, Length, Point, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, column, container, row, Space};

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    /// The text field screen with its floating keyboard.
    host: HostScreen,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key on the floating keyboard was pressed.
    Keyboard(KeyboardMessage),
    /// A text field was clicked.
    FieldPressed(FieldId),
    /// Pointer pressed. Touch events carry a position, mouse buttons do not.
    PointerPressed(Option<Point>),
    /// Pointer moved to a window position.
    PointerMoved(Point),
    /// Pointer released or the touch was lost.
    PointerReleased,
    /// Window has been resized.
    WindowResized(f32, f32),
    /// Configuration has been updated.
    UpdateConfig(Config),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        mut core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Load configuration
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    tracing::warn!("Using defaults for invalid config entries: {:?}", errors);
                    config
                }
            })
            .unwrap_or_default();

        // Without a header bar, window coordinates are stage coordinates
        core.window.show_headerbar = false;

        let layout = load_layout_or_default(&config.layout);
        let mut host = HostScreen::new(layout, &config, fl!("field-hint"));
        host.resized(app_settings::DEFAULT_WIDTH, app_settings::DEFAULT_HEIGHT);

        let app = AppModel { core, config, host };

        (app, Task::none())
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let padding = app_settings::STAGE_PADDING as u16;

        let mut fields = column::column()
            .spacing(12.0)
            .push(widget::text::title3(fl!("app-title")))
            .push(widget::text::body(fl!("field-label")));
        for field in self.host.form().fields() {
            let focused = self.host.form().is_focused(&field.id);
            fields = fields.push(render_field(
                field,
                focused,
                Message::FieldPressed(field.id.clone()),
            ));
        }
        if !self.host.keyboard().is_visible() {
            fields = fields.push(widget::text::caption(fl!("keyboard-hidden")));
        }

        let form = container(fields)
            .padding(padding)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stage: Stack<'_, Message, cosmic::Theme, cosmic::Renderer> = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(form);

        let keyboard = self.host.keyboard();
        if keyboard.is_visible() {
            // Margins below zero only happen for a keyboard larger than the stage
            let position = keyboard.position();
            let placed = column::column()
                .push(Space::new(Length::Shrink, position.top.max(0) as f32))
                .push(
                    row::row()
                        .push(Space::new(position.left.max(0) as f32, Length::Shrink))
                        .push(render_keyboard(keyboard).map(Message::Keyboard)),
                );
            stage = stage.push(
                container(placed)
                    .padding(padding)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        stage.into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![];

        // Raw pointer events drive the drag handle
        subscriptions.push(event::listen_with(|event, _status, _id| event_message(event)));

        // Watch for configuration changes
        let config_subscription = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));
        subscriptions.push(config_subscription);

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::Keyboard(KeyboardMessage::KeyPressed(code)) => {
                let outcome = self.host.handle_key(code);
                tracing::debug!("Key {} -> {:?}", code, outcome);
            }
            Message::FieldPressed(id) => {
                self.host.field_pressed(&id);
            }
            Message::PointerPressed(position) => {
                let point = position.map(|p| (p.x, p.y)).or(self.host.cursor());
                if let Some((x, y)) = point {
                    let gesture = self.host.pointer_pressed(x, y);
                    tracing::trace!("Press at ({}, {}) -> {:?}", x, y, gesture);
                }
            }
            Message::PointerMoved(position) => {
                self.host.pointer_moved(position.x, position.y);
            }
            Message::PointerReleased => {
                self.host.pointer_released();
            }
            Message::WindowResized(width, height) => {
                tracing::debug!("Window resized to {}x{}", width, height);
                self.host.resized(width, height);
            }
            Message::UpdateConfig(config) => {
                let layout_changed = config.layout != self.config.layout;
                self.host.apply_config(&config, layout_changed);
                self.config = config;
            }
        }

        Task::none()
    }
}

/// Maps the window events the stage cares about to messages.
pub fn event_message(event: Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width, size.height))
        }
        Event::Mouse(mouse_event) => match mouse_event {
            mouse::Event::CursorMoved { position } => Some(Message::PointerMoved(position)),
            mouse::Event::ButtonPressed(mouse::Button::Left) => Some(Message::PointerPressed(None)),
            mouse::Event::ButtonReleased(mouse::Button::Left) => Some(Message::PointerReleased),
            _ => None,
        },
        Event::Touch(touch_event) => match touch_event {
            touch::Event::FingerPressed { position, .. } => {
                Some(Message::PointerPressed(Some(position)))
            }
            touch::Event::FingerMoved { position, .. } => Some(Message::PointerMoved(position)),
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. } => {
                Some(Message::PointerReleased)
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::iced::Size;

    /// Test: Window settings match app_settings values
    #[test]
    fn test_window_settings_match_app_settings() {
        assert_eq!(app_settings::DEFAULT_WIDTH, 480.0);
        assert_eq!(app_settings::DEFAULT_HEIGHT, 720.0);
        assert!(app_settings::MIN_WIDTH <= app_settings::DEFAULT_WIDTH);
        assert!(app_settings::MIN_HEIGHT <= app_settings::DEFAULT_HEIGHT);
        assert_eq!(
            app_settings::APP_ID,
            "io.github.floatboard.Floatboard",
            "APP_ID should match RDNN format"
        );
    }

    /// Test: the default keyboard fits the minimum window
    #[test]
    fn test_keyboard_fits_minimum_window() {
        let padding = 2 * app_settings::STAGE_PADDING;
        assert!(app_settings::KEYBOARD_WIDTH <= app_settings::MIN_WIDTH as i32 - padding);
    }

    #[test]
    fn test_mouse_events_map_to_pointer_messages() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(
            event_message(Event::Mouse(mouse::Event::CursorMoved { position: point })),
            Some(Message::PointerMoved(point))
        );
        assert_eq!(
            event_message(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))),
            Some(Message::PointerPressed(None))
        );
        assert_eq!(
            event_message(Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))),
            Some(Message::PointerReleased)
        );
        assert_eq!(
            event_message(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right))),
            None,
            "Only the primary button drags"
        );
    }

    #[test]
    fn test_touch_events_map_to_pointer_messages() {
        let point = Point::new(5.0, 6.0);
        let finger = touch::Finger(1);
        assert_eq!(
            event_message(Event::Touch(touch::Event::FingerPressed {
                id: finger,
                position: point
            })),
            Some(Message::PointerPressed(Some(point)))
        );
        assert_eq!(
            event_message(Event::Touch(touch::Event::FingerMoved {
                id: finger,
                position: point
            })),
            Some(Message::PointerMoved(point))
        );
        assert_eq!(
            event_message(Event::Touch(touch::Event::FingerLost {
                id: finger,
                position: point
            })),
            Some(Message::PointerReleased)
        );
    }

    #[test]
    fn test_resize_event_maps_to_message() {
        assert_eq!(
            event_message(Event::Window(window::Event::Resized(Size::new(640.0, 480.0)))),
            Some(Message::WindowResized(640.0, 480.0))
        );
    }
}
