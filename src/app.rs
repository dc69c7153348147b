//! The counter view as a bubbletea model.
//!
//! The model owns one integer. Activating the control returns a [`Cmd`] that
//! asks the [`CounterSource`] for the next value; when the command's message
//! comes back, the counter is replaced with whatever the source answered.
//! Nothing guards against overlapping activations: results are applied in the
//! order they arrive.

use std::sync::Arc;

use bubbletea::{Cmd, KeyMsg, KeyType, Message, Model, MouseAction, MouseButton, MouseMsg, quit};
use tokio::runtime::Handle;

use crate::error::Error;
use crate::remote::CounterSource;
use crate::view::{self, Theme};

/// A request finished and produced a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFetched {
    /// Counter value sent with the request.
    pub requested: i64,
    pub result: i64,
}

/// A request failed; the counter is left alone.
#[derive(Debug)]
pub struct CountFetchFailed {
    pub requested: i64,
    pub error: Error,
}

pub struct CounterView {
    count: i64,
    source: Arc<dyn CounterSource>,
    runtime: Handle,
    theme: Theme,
}

impl CounterView {
    /// Mount the view with the counter at 0.
    ///
    /// `runtime` drives the requests issued by [`CounterView::activate`]; it
    /// must be a multi-threaded runtime, and commands must not be executed
    /// from inside one of its async tasks.
    pub fn new(source: Arc<dyn CounterSource>, runtime: Handle) -> Self {
        Self {
            count: 0,
            source,
            runtime,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Command for one activation of the "Click me" control.
    ///
    /// The counter is captured now; the command resolves to either
    /// [`CountFetched`] or [`CountFetchFailed`].
    pub fn activate(&self) -> Cmd {
        let current = self.count;
        let source = Arc::clone(&self.source);
        let runtime = self.runtime.clone();
        Cmd::new(move || match runtime.block_on(source.next(current)) {
            Ok(result) => Message::new(CountFetched {
                requested: current,
                result,
            }),
            Err(error) => Message::new(CountFetchFailed {
                requested: current,
                error,
            }),
        })
    }

    fn handle_key(&self, key: &KeyMsg) -> Option<Cmd> {
        match key.key_type {
            KeyType::Enter | KeyType::Space => Some(self.activate()),
            KeyType::Runes => match key.runes.as_slice() {
                [' '] => Some(self.activate()),
                ['q' | 'Q'] => Some(quit()),
                _ => None,
            },
            KeyType::CtrlC | KeyType::Esc => Some(quit()),
            _ => None,
        }
    }

    fn handle_mouse(&self, mouse: &MouseMsg) -> Option<Cmd> {
        if mouse.button != MouseButton::Left || mouse.action != MouseAction::Press {
            return None;
        }
        let row = self.theme.control_row(&view::render(self.count))?;
        (usize::from(mouse.y) == row).then(|| self.activate())
    }
}

impl Model for CounterView {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse);
        }

        if let Some(fetched) = msg.downcast_ref::<CountFetched>() {
            tracing::debug!(
                requested = fetched.requested,
                result = fetched.result,
                previous = self.count,
                "applying count"
            );
            self.count = fetched.result;
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<CountFetchFailed>() {
            tracing::warn!(
                requested = failed.requested,
                error = %failed.error,
                "count request failed; keeping {}",
                self.count
            );
        }

        None
    }

    fn view(&self) -> String {
        self.theme.render(&view::render(self.count))
    }
}
