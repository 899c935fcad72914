use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

use larder_expiry::{days_until_expiry_at, is_expiring};

use crate::event::StoreEvent;
use crate::item::{Item, ItemId, ItemPatch, NewItem};
use crate::prefs::NotificationPrefs;
use crate::query::{CategoryFilter, ItemQuery, SortOption, StatusFilter};
use crate::storage::StorageBackend;

/// Errors from inventory mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// The single source of truth for the item collection and view state.
///
/// Construct one at application start and inject it into whatever consumes
/// it; all mutation goes through `add`/`update`/`delete`/`import_items`.
/// Every mutation runs one post-mutation step: persist the full collection,
/// recompute the expiring subset over the whole collection, and emit a
/// [`StoreEvent`] to subscribers. No intermediate state is observable.
pub struct Inventory {
    items: Vec<Item>,
    view: ItemQuery,
    prefs: NotificationPrefs,
    expiring: Vec<ItemId>,
    backend: Box<dyn StorageBackend>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Inventory {
    /// Load the collection from the backend.
    ///
    /// A failed read logs a warning and starts empty; initialization never
    /// fails.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        let items = backend.load_all().unwrap_or_else(|e| {
            tracing::warn!("Failed to load stored items: {}, starting empty", e);
            Vec::new()
        });
        let mut inventory = Self {
            items,
            view: ItemQuery::default(),
            prefs: NotificationPrefs::default(),
            expiring: Vec::new(),
            backend,
            subscribers: Vec::new(),
        };
        inventory.recompute_expiring(Self::today());
        inventory
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Create an item from a form payload, assigning `id` and `created_at`.
    ///
    /// The payload is accepted as-is; validation happened in the form.
    pub fn add(&mut self, data: NewItem) -> Item {
        let item = Item {
            id: Uuid::new_v4(),
            name: data.name,
            category: data.category,
            quantity: data.quantity,
            expire_date: data.expire_date,
            purchase_date: data.purchase_date,
            created_at: Utc::now(),
        };
        self.items.push(item.clone());
        self.after_change(StoreEvent::Created(Box::new(item.clone())));
        item
    }

    /// Merge `patch` onto the item with `id`, leaving other fields as-is.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> Result<(), StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(item);
        self.after_change(StoreEvent::Updated { id, patch });
        Ok(())
    }

    /// Remove the item with `id`. Removal is immediate and permanent.
    pub fn delete(&mut self, id: ItemId) -> Result<(), StoreError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(pos);
        self.after_change(StoreEvent::Deleted {
            id,
            name: removed.name,
        });
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currently selected view state.
    pub fn view(&self) -> &ItemQuery {
        &self.view
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.view.sort = sort;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.view.status = status;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.view.category = category;
    }

    pub fn notification_prefs(&self) -> NotificationPrefs {
        self.prefs
    }

    pub fn set_notification_prefs(&mut self, prefs: NotificationPrefs) {
        self.prefs = prefs;
    }

    /// Evaluate the current view state against the collection.
    ///
    /// Computed fresh on every call, never cached.
    pub fn query(&self) -> Vec<Item> {
        self.query_at(Self::today())
    }

    /// [`Inventory::query`] with an explicit reference date.
    pub fn query_at(&self, today: NaiveDate) -> Vec<Item> {
        self.view.apply(&self.items, today)
    }

    /// Items whose days-until-expiry falls in the fixed `[0, 4]` window.
    ///
    /// Always reflects the whole collection, independent of the active
    /// filters; this feeds the notification badge and popup.
    pub fn expiring_items(&self) -> Vec<Item> {
        self.expiring
            .iter()
            .filter_map(|id| self.get(*id))
            .cloned()
            .collect()
    }

    pub fn expiring_count(&self) -> usize {
        self.expiring.len()
    }

    /// Subscribe to mutation events. Dropped receivers are pruned on send.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// The full collection as a pretty JSON array for the export
    /// collaborator.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the collection wholesale with imported records.
    ///
    /// Shape validation of the candidate records is the import
    /// collaborator's concern.
    pub fn import_items(&mut self, items: Vec<Item>) {
        let count = items.len();
        self.items = items;
        self.after_change(StoreEvent::Imported { count });
    }

    /// Remove every item. Used by the settings screen's clear-all action.
    pub fn clear(&mut self) {
        self.items.clear();
        self.after_change(StoreEvent::Cleared);
    }

    /// The single post-mutation step: persist, recompute derived state,
    /// emit. A failed write stays in the log; in-memory state remains
    /// authoritative for the session.
    fn after_change(&mut self, event: StoreEvent) {
        if let Err(e) = self.backend.save_all(&self.items) {
            tracing::warn!("Failed to persist items: {}", e);
        } else {
            tracing::debug!("Persisted {} items", self.items.len());
        }
        self.recompute_expiring(Self::today());
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    fn recompute_expiring(&mut self, today: NaiveDate) {
        self.expiring = self
            .items
            .iter()
            .filter(|item| is_expiring(days_until_expiry_at(&item.expire_date, today)))
            .map(|item| item.id)
            .collect();
    }
}
