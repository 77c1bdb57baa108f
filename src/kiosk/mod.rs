//! Kiosk domain: the static menu, confirmed orders and the ordering wizard.

pub mod flow;
pub mod menu;
pub mod order;
