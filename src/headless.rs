//! Click the counter without a terminal UI.
//!
//! Drives [`CounterView`] through the same update path as the interactive
//! program: each click runs the activation command to completion before the
//! next one is issued.

use bubbletea::{KeyMsg, KeyType, Message, Model};

use crate::app::CounterView;
use crate::view::{self, Theme};

/// Click `times` times in sequence and return the final count.
pub fn click(view: &mut CounterView, times: u32) -> i64 {
    for _ in 0..times {
        let mut pending = view.update(Message::new(KeyMsg::from_type(KeyType::Enter)));
        while let Some(cmd) = pending.take() {
            if let Some(msg) = cmd.execute() {
                pending = view.update(msg);
            }
        }
    }
    view.count()
}

/// Plain rendering of the view at `count`, without the key help line.
#[must_use]
pub fn report(count: i64) -> String {
    Theme::plain().render_body(&view::render(count))
}
