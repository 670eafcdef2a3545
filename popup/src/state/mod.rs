//! Popup state.
//!
//! DESIGN
//! ======
//! State is plain data held in an `RwSignal` provided via context, so the
//! display rules can be unit-tested without a browser.

pub mod panel;
