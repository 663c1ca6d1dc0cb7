//! Hand-off point for saved entries.
//!
//! Persisting a transaction is the host's job. The drawer only hands the
//! entry over and moves on; it never waits for or hears about the outcome.

use shared::SavedEntry;

/// Receiver of entries produced by [`crate::EntryController::save`]
pub trait TransactionSink {
    fn submit(&mut self, entry: SavedEntry);
}

impl<F> TransactionSink for F
where
    F: FnMut(SavedEntry),
{
    fn submit(&mut self, entry: SavedEntry) {
        self(entry)
    }
}

/// Sink that logs and drops every entry, for previews and demos
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl TransactionSink for LoggingSink {
    fn submit(&mut self, entry: SavedEntry) {
        log::info!(
            "💾 Entry on {} for amount {:?} ({:?})",
            entry.date,
            entry.amount_text,
            entry.description
        );
    }
}
