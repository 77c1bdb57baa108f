//! The ordering wizard.
//!
//! [`OrderFlow`] owns every piece of domain state of a kiosk session: the
//! current step with the selections made so far, the email being typed, the
//! inline validation message, the order book and the two "currently
//! inspected" slots backing the detail dialogs.

use crate::kiosk::menu::{Dessert, MenuChoice, Plat};
use crate::kiosk::order::{Order, OrderBook, OrderStamp};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_EMAIL_SUFFIX: &str = "@lycee-ndduroc.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("L'email doit se terminer par {suffix}")]
    EmailSuffix { suffix: String },
}

/// Wizard position. Later steps carry the choices made before them, so a
/// confirmation always has both dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Email,
    Plat,
    Dessert { plat: Plat },
    Confirmation { plat: Plat, dessert: Dessert },
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::Email => "email",
            Step::Plat => "plat",
            Step::Dessert { .. } => "dessert",
            Step::Confirmation { .. } => "confirmation",
        }
    }
}

#[derive(Debug)]
pub struct OrderFlow {
    suffix: String,
    step: Step,
    email: String,
    error: Option<String>,
    orders: OrderBook,
    inspected_order: Option<Order>,
    inspected_item: Option<MenuChoice>,
}

impl Default for OrderFlow {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_SUFFIX)
    }
}

impl OrderFlow {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            step: Step::Email,
            email: String::new(),
            error: None,
            orders: OrderBook::new(),
            inspected_order: None,
            inspected_item: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if email.ends_with(self.suffix.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::EmailSuffix {
                suffix: self.suffix.clone(),
            })
        }
    }

    /// Replace the email being typed. The error message stays until the next
    /// submit or cancel.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn submit_email(&mut self) -> Result<(), ValidationError> {
        if self.step != Step::Email {
            return Ok(());
        }
        match self.validate_email(&self.email) {
            Ok(()) => {
                self.error = None;
                self.step = Step::Plat;
                debug!(email = %self.email, "email accepted");
                Ok(())
            }
            Err(e) => {
                info!(email = %self.email, "email rejected");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Returns `false` when not on the plat step.
    pub fn select_plat(&mut self, plat: Plat) -> bool {
        if self.step != Step::Plat {
            debug!(step = self.step.label(), "plat selection ignored");
            return false;
        }
        self.step = Step::Dessert { plat };
        true
    }

    /// Returns `false` when not on the dessert step.
    pub fn select_dessert(&mut self, dessert: Dessert) -> bool {
        let Step::Dessert { plat } = self.step else {
            debug!(step = self.step.label(), "dessert selection ignored");
            return false;
        };
        self.step = Step::Confirmation { plat, dessert };
        true
    }

    /// Record the order being confirmed and restart the wizard. `None` when
    /// not on the confirmation step.
    pub fn confirm(&mut self, stamp: OrderStamp) -> Option<&Order> {
        let Step::Confirmation { plat, dessert } = self.step else {
            debug!(step = self.step.label(), "confirm ignored");
            return None;
        };
        let order = Order {
            id: stamp.id,
            email: std::mem::take(&mut self.email),
            plat,
            dessert,
            timestamp: stamp.timestamp,
        };
        info!(
            id = order.id,
            email = %order.email,
            plat = %order.plat,
            dessert = %order.dessert,
            "order confirmed"
        );
        self.orders.record(order);
        self.step = Step::Email;
        self.orders.iter().next()
    }

    /// Abandon the order in progress from any step.
    pub fn cancel(&mut self) {
        if self.step != Step::Email {
            info!(step = self.step.label(), "order cancelled");
        }
        self.step = Step::Email;
        self.email.clear();
        self.error = None;
    }

    /// Whether the order history should be on screen: the email field is
    /// filled and currently valid.
    pub fn history_visible(&self) -> bool {
        !self.email.is_empty() && self.validate_email(&self.email).is_ok()
    }

    /// Orders of the current email, newest first.
    pub fn history(&self) -> Vec<&Order> {
        self.orders.for_email(&self.email).collect()
    }

    /// Open the detail of the `index`-th entry of [`history`](Self::history).
    pub fn inspect_order(&mut self, index: usize) -> bool {
        let picked = self.orders.for_email(&self.email).nth(index).cloned();
        let found = picked.is_some();
        if found {
            self.inspected_order = picked;
        }
        found
    }

    pub fn inspected_order(&self) -> Option<&Order> {
        self.inspected_order.as_ref()
    }

    pub fn dismiss_order(&mut self) {
        self.inspected_order = None;
    }

    /// Open the item detail. Available on the plat and dessert screens only;
    /// the step is left untouched.
    pub fn inspect_item(&mut self, choice: MenuChoice) -> bool {
        let allowed = matches!(
            (self.step, choice),
            (Step::Plat, MenuChoice::Plat(_)) | (Step::Dessert { .. }, MenuChoice::Dessert(_))
        );
        if allowed {
            self.inspected_item = Some(choice);
        }
        allowed
    }

    pub fn inspected_item(&self) -> Option<MenuChoice> {
        self.inspected_item
    }

    pub fn dismiss_item(&mut self) {
        self.inspected_item = None;
    }
}
