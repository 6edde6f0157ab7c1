//! Ports (trait boundaries) for external collaborators.
//!
//! The search core owns these traits; adapters implement them for progress
//! display and result rendering.

pub mod observer;
pub mod reporter;

pub use observer::{NullObserver, SearchObserver};
pub use reporter::Reporter;
