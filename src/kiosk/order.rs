//! Confirmed orders and the session's order book.

use crate::kiosk::menu::{Dessert, Plat};
use chrono::{DateTime, Local, TimeZone};
use std::collections::VecDeque;
use std::fmt::{self, Write as _};

pub type OrderId = i64;

/// Used when the configured timestamp format cannot be rendered.
const FALLBACK_TIME_FORMAT: &str = "%H:%M:%S";

/// A confirmed order. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub email: String,
    pub plat: Plat,
    pub dessert: Dessert,
    /// Time of day for display only. Not sortable; insertion order is the
    /// only ordering.
    pub timestamp: String,
}

/// Identity and display time handed to the flow when an order is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStamp {
    pub id: OrderId,
    pub timestamp: String,
}

/// Issues order stamps from the wall clock.
///
/// Ids are the creation instant in milliseconds, bumped past the previous id
/// when the clock does not move forward, so they stay strictly increasing.
#[derive(Debug)]
pub struct StampClock {
    format: String,
    last_id: Option<OrderId>,
}

impl StampClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            last_id: None,
        }
    }

    pub fn stamp(&mut self) -> OrderStamp {
        self.stamp_at(Local::now())
    }

    pub fn stamp_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> OrderStamp
    where
        Tz::Offset: fmt::Display,
    {
        let millis = now.timestamp_millis();
        let id = match self.last_id {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last_id = Some(id);
        OrderStamp {
            id,
            timestamp: format_time(&now, &self.format),
        }
    }
}

/// Format `now` with a strftime pattern, falling back to `HH:MM:SS` when the
/// pattern is invalid.
pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }
    now.format(FALLBACK_TIME_FORMAT).to_string()
}

/// All orders of the session, newest first. Append-only.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: VecDeque<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, order: Order) {
        self.orders.push_front(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Orders placed with exactly this email (case-sensitive), newest first.
    pub fn for_email<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |o| o.email == email)
    }
}
