//! Render-pass observers.

use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;

use loresheet_domain::{SheetId, SubscriptionId};

use super::coordinator::RenderMode;

type RenderCallback = Box<dyn Fn(SheetId, RenderMode) + Send + Sync>;

/// Callbacks invoked after each completed render pass of one sheet.
///
/// Closed observers stop delivering permanently; subscriptions made after
/// close are inert. Every subscription gets an id for targeted removal.
#[derive(Default)]
pub struct RenderObservers {
    callbacks: DashMap<SubscriptionId, RenderCallback>,
    closed: AtomicBool,
}

impl RenderObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(SheetId, RenderMode) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId::new();
        if self.is_closed() {
            tracing::warn!(subscription_id = %id, "Subscribing to closed render observers");
            return id;
        }
        self.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Removes a subscription. Returns whether it was present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Drops all subscriptions and refuses new ones.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.callbacks.clear();
    }

    pub(crate) fn notify(&self, sheet_id: SheetId, mode: RenderMode) {
        if self.is_closed() {
            return;
        }
        for entry in self.callbacks.iter() {
            (entry.value())(sheet_id, mode);
        }
    }
}
