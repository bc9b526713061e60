// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::qr_modal;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Keyboard subscription: while the QR modal is open, Escape closes it.
/// This is one of several close event sources, which is why the session's
/// close path carries a re-entrancy guard.
pub fn create_event_subscription(qr_open: bool) -> Subscription<Message> {
    if !qr_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = event
        {
            return Some(Message::Qr(qr_modal::Message::Close));
        }
        None
    })
}

/// Periodic tick driving notification auto-dismiss and the map's
/// scroll-zoom release. Idle when neither has pending work.
pub fn create_tick_subscription(
    has_notifications: bool,
    map_has_timers: bool,
) -> Subscription<Message> {
    if has_notifications || map_has_timers {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
