// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while the lightbox image resolves.

use std::time::{Duration, Instant};

/// Time after which a pending load is reported as slow.
const LOADING_TIMEOUT: Duration = Duration::from_secs(10);

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    started_at: Option<Instant>,
    frame: usize,
    timed_out: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    StartLoading,
    /// Image resolved, either to pixels or to a placeholder.
    StopLoading,
    SpinnerTick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Emitted once per load when it exceeds the timeout.
    LoadingTimedOut,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::StartLoading => {
                self.is_loading = true;
                self.started_at = Some(Instant::now());
                self.frame = 0;
                self.timed_out = false;
                Effect::None
            }
            Message::StopLoading => {
                *self = Self::default();
                Effect::None
            }
            Message::SpinnerTick => {
                if !self.is_loading {
                    return Effect::None;
                }
                self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
                match self.started_at {
                    Some(started) if !self.timed_out && started.elapsed() > LOADING_TIMEOUT => {
                        self.timed_out = true;
                        Effect::LoadingTimedOut
                    }
                    _ => Effect::None,
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    #[must_use]
    pub fn spinner_glyph(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }

    #[cfg(test)]
    fn backdate(&mut self, by: Duration) {
        self.started_at = self.started_at.and_then(|started| started.checked_sub(by));
    }
}
