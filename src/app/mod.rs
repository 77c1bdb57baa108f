//! Kiosk shell: UI state, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
