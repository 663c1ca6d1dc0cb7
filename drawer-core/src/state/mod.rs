//! Drawer session state.

pub mod entry_state;

pub use entry_state::{keypad_keys, EntryController};
