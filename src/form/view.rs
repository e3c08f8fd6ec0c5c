// SPDX-License-Identifier: GPL-3.0-only

//! Text field rendering.
//!
//! Fields are drawn by the host rather than with a native text input so
//! that physical keyboard text never reaches them: the floating keyboard is
//! their only input.

use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget::{self, container, mouse_area, row};
use cosmic::Element;

use crate::form::TextField;

/// Padding inside the field frame in pixels.
const FIELD_PADDING: u16 = 10;

/// Renders `field`, emitting `on_press` when it is clicked.
///
/// The focused field shows a caret at the cursor, or highlights its
/// selection. Empty fields show their hint instead.
pub fn render_field<'a, Message: Clone + 'static>(
    field: &TextField,
    focused: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let (before, selected, after) = field.segments();

    let mut line = row::row();
    if field.is_empty() {
        if focused {
            line = line.push(caret());
        }
        if let Some(hint) = &field.hint {
            line = line.push(widget::text::caption(hint.clone()));
        }
    } else {
        line = line.push(widget::text::body(before.to_string()));
        if !focused {
            line = line.push(widget::text::body(format!("{}{}", selected, after)));
        } else {
            if selected.is_empty() {
                line = line.push(caret());
            } else {
                line = line.push(
                    container(widget::text::body(selected.to_string())).class(
                        cosmic::style::Container::custom(|theme| container::Style {
                            background: Some(Background::Color(
                                theme.cosmic().accent_color().into(),
                            )),
                            ..Default::default()
                        }),
                    ),
                );
            }
            line = line.push(widget::text::body(after.to_string()));
        }
    }

    let frame = container(line)
        .padding(FIELD_PADDING)
        .width(Length::Fill)
        .class(cosmic::style::Container::custom(move |theme| {
            let cosmic = theme.cosmic();
            let (color, width) = if focused {
                (Color::from(cosmic.accent_color()), 2.0)
            } else {
                let mut color = Color::from(cosmic.on_bg_component_color());
                color.a = 0.3;
                (color, 1.0)
            };
            container::Style {
                border: Border {
                    color,
                    width,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        }));

    mouse_area(frame).on_press(on_press).into()
}

fn caret<'a, Message: 'static>() -> Element<'a, Message> {
    widget::text::body("|").into()
}
