// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard rendering with libcosmic widgets.
//!
//! The keyboard is a fixed-size container: the painted drag handle on top,
//! then one row of key buttons per layout row. Keys only emit messages
//! while the keyboard is enabled.
//!
//! The whole keyboard reports a mouse interaction so the stage stops
//! routing the cursor to the fields underneath it.

use cosmic::iced::{mouse, Alignment, Background, Border, Length};
use cosmic::widget::{self, button, column, container, mouse_area, row, Space};
use cosmic::Element;

use crate::app_settings::{KEY_HEIGHT, KEY_SPACING, KEYBOARD_PADDING};
use crate::keyboard::handle::{Handle, HandlePaint};
use crate::keyboard::message::KeyboardMessage;
use crate::keyboard::sizing::{calculate_base_unit, inner_width, key_width};
use crate::keyboard::FloatingKeyboard;
use crate::layout::Key;

/// Renders the whole keyboard at its current size.
pub fn render_keyboard<'a>(keyboard: &FloatingKeyboard) -> Element<'a, KeyboardMessage> {
    let extent = keyboard.extent();
    let layout = keyboard.layout();
    let base_unit = calculate_base_unit(inner_width(extent.width), layout.max_row_units());

    let mut rows = column::column().spacing(KEY_SPACING);
    for layout_row in &layout.rows {
        let mut row_widget = row::row().spacing(KEY_SPACING);
        for key in &layout_row.keys {
            row_widget = row_widget.push(render_key(key, base_unit, keyboard.is_enabled()));
        }
        rows = rows.push(row_widget);
    }

    let content = column::column()
        .push(render_handle(keyboard.handle()))
        .push(container(rows).padding(KEYBOARD_PADDING));

    let frame = container(content)
        .width(Length::Fixed(extent.width as f32))
        .height(Length::Fixed(extent.height as f32))
        .class(cosmic::style::Container::Background);

    mouse_area(frame)
        .interaction(mouse::Interaction::Idle)
        .into()
}

/// Renders the handle outline as its tab and band rectangles.
pub fn render_handle<'a>(handle: &Handle) -> Element<'a, KeyboardMessage> {
    let shape = *handle.shape();
    let paint = *handle.paint();

    let tab = container(Space::new(shape.tab.width, shape.tab.height))
        .class(cosmic::style::Container::custom(move |_theme| painted(paint)));
    let tab_row = row::row()
        .push(Space::new(shape.tab.x, shape.tab.height))
        .push(tab);

    let band = container(Space::new(shape.band.width, shape.band.height))
        .class(cosmic::style::Container::custom(move |_theme| painted(paint)));

    let strip = column::column()
        .push(tab_row)
        .push(band)
        .height(Length::Fixed(handle.strip_height() as f32));

    mouse_area(strip)
        .interaction(mouse::Interaction::Grab)
        .into()
}

fn painted(paint: HandlePaint) -> container::Style {
    container::Style {
        background: Some(Background::Color(paint.color)),
        border: Border {
            radius: paint.corner_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Renders one key button.
pub fn render_key<'a>(key: &Key, base_unit: f32, enabled: bool) -> Element<'a, KeyboardMessage> {
    let label = container(widget::text::body(key.label.clone()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    let btn = button::custom(label)
        .class(cosmic::style::Button::Standard)
        .width(Length::Fixed(key_width(key.width, base_unit)))
        .height(Length::Fixed(KEY_HEIGHT));

    if enabled {
        btn.on_press(KeyboardMessage::KeyPressed(key.code)).into()
    } else {
        btn.into()
    }
}
