// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for the lightbox image load.
//!
//! Each shown photo starts a load identified by a [`LoadTicket`]. Only the
//! most recent ticket may update the display; results for an older ticket
//! are reported as [`LoadOutcome::Stale`] and must be dropped. A failed load
//! resolves once to a placeholder reference derived from the title.

use crate::error::ImageResolutionError;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/800x600/1a0b2a/8a2be2";

/// Deterministic placeholder reference for a memory title.
#[must_use]
pub fn placeholder_reference(title: &str) -> String {
    format!("{PLACEHOLDER_BASE}?text={}", urlencoding::encode(title))
}

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub index: usize,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    ticket: LoadTicket,
    title: String,
}

/// How a resolved load should be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The ticket is no longer current; discard.
    Stale,
    /// Image ready; clear the loading indicator.
    Loaded(T),
    /// Image failed; show the placeholder and clear the loading indicator.
    Placeholder {
        reference: String,
        error: ImageResolutionError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    pending: Option<Pending>,
    next_generation: u64,
}

impl LoadTracker {
    /// Starts a load for `index`, superseding any pending one.
    pub fn begin(&mut self, index: usize, title: &str) -> LoadTicket {
        let ticket = LoadTicket {
            index,
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.pending = Some(Pending {
            ticket,
            title: title.to_string(),
        });
        ticket
    }

    /// Drops the pending load, e.g. when the lightbox closes.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }

    pub fn resolve<T>(
        &mut self,
        ticket: LoadTicket,
        result: Result<T, ImageResolutionError>,
    ) -> LoadOutcome<T> {
        let Some(pending) = self.pending.take_if(|pending| pending.ticket == ticket) else {
            tracing::trace!(index = ticket.index, "discarding stale image load");
            return LoadOutcome::Stale;
        };

        match result {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(error) => {
                tracing::debug!(index = ticket.index, %error, "image unavailable, using placeholder");
                LoadOutcome::Placeholder {
                    reference: placeholder_reference(&pending.title),
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Result<(), ImageResolutionError> {
        Err(ImageResolutionError::Io("not found".into()))
    }

    #[test]
    fn placeholder_is_derived_from_title() {
        assert_eq!(
            placeholder_reference("Title A"),
            "https://via.placeholder.com/800x600/1a0b2a/8a2be2?text=Title%20A"
        );
        assert_eq!(placeholder_reference("x"), placeholder_reference("x"));
    }

    #[test]
    fn current_success_clears_loading() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(0, "A");
        assert!(tracker.is_loading());
        assert_eq!(tracker.resolve(ticket, Ok(7)), LoadOutcome::Loaded(7));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn current_failure_yields_placeholder_once() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(2, "Title C");
        match tracker.resolve(ticket, failure()) {
            LoadOutcome::Placeholder { reference, .. } => {
                assert_eq!(reference, placeholder_reference("Title C"));
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
        assert!(!tracker.is_loading());
        assert_eq!(tracker.resolve(ticket, failure()), LoadOutcome::Stale);
    }

    #[test]
    fn superseded_ticket_is_stale() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin(0, "A");
        let second = tracker.begin(1, "B");

        assert_eq!(tracker.resolve(first, Ok(())), LoadOutcome::Stale);
        assert!(tracker.is_loading());
        assert_eq!(tracker.resolve(second, Ok(())), LoadOutcome::Loaded(()));
    }

    #[test]
    fn reopening_same_index_supersedes_older_ticket() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin(3, "D");
        let second = tracker.begin(3, "D");
        assert_ne!(first, second);
        assert_eq!(tracker.resolve(first, failure()), LoadOutcome::Stale);
        assert_eq!(tracker.pending_ticket(), Some(second));
    }

    #[test]
    fn cancel_makes_pending_ticket_stale() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(0, "A");
        tracker.cancel();
        assert_eq!(tracker.resolve(ticket, Ok(())), LoadOutcome::Stale);
    }
}
