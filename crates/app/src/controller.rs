//! The inventory controller: single point of truth for pantry state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use larder_core::{filter_by_name, validate_entry, Item};
use larder_store::{DocumentStore, Fields, StoreError};

use crate::form::{FormMode, ItemForm};
use crate::notice::Notice;

/// Collection holding the pantry documents.
pub const PANTRY_COLLECTION: &str = "pantry";
/// Document field carrying an item's quantity.
pub const QUANTITY_FIELD: &str = "quantity";

const FETCH_FAILED: &str = "Error fetching inventory";
const ADD_SUCCEEDED: &str = "Item added successfully!";
const ADD_FAILED: &str = "Failed to add item";
const UPDATE_SUCCEEDED: &str = "Item updated successfully!";
const UPDATE_FAILED: &str = "Failed to update item";
const REMOVE_SUCCEEDED: &str = "Item removed successfully!";
const REMOVE_FAILED: &str = "Failed to remove item";

/// Submission lifecycle of a user action.
///
/// The outcome itself (success or failure) is recorded as a [`Notice`]; the
/// state returns to `Idle` once the action concludes. A UI may read
/// [`InventoryController::is_submitting`] to disable its form while an
/// action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Single point of truth for inventory state and the only caller of store
/// operations.
///
/// Owns a wholesale snapshot of the backing collection plus the derived
/// filtered view the UI renders. Every mutation concludes with a full
/// [`refresh`](Self::refresh), so the UI reflects actual store contents
/// rather than assumed ones.
pub struct InventoryController<S> {
    store: S,
    collection: String,
    snapshot: Vec<Item>,
    filtered: Vec<Item>,
    search_query: String,
    fetched_at: Option<DateTime<Utc>>,
    submit_state: SubmitState,
    notice: Option<Notice>,
    form: ItemForm,
}

impl<S: DocumentStore> InventoryController<S> {
    /// Controller over the default [`PANTRY_COLLECTION`]. Call
    /// [`refresh`](Self::refresh) once after construction to load the
    /// initial snapshot.
    pub fn new(store: S) -> Self {
        Self::with_collection(store, PANTRY_COLLECTION)
    }

    /// Controller over a custom collection name.
    pub fn with_collection(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            snapshot: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            fetched_at: None,
            submit_state: SubmitState::Idle,
            notice: None,
            form: ItemForm::default(),
        }
    }

    /// Full snapshot, in store enumeration order.
    pub fn inventory(&self) -> &[Item] {
        &self.snapshot
    }

    /// Snapshot filtered by the active search query; what the UI renders.
    pub fn filtered_inventory(&self) -> &[Item] {
        &self.filtered
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// When the snapshot was last fetched successfully.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Consume the current notice (the UI dismissing the banner).
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Replace the snapshot with the store's current contents.
    ///
    /// On failure the prior snapshot stays intact (stale but available) and
    /// an error notice is raised.
    pub async fn refresh(&mut self) {
        match self.store.list(&self.collection).await {
            Ok(entries) => {
                self.snapshot = entries
                    .into_iter()
                    .map(|(key, fields)| item_from_document(key, &fields))
                    .collect();
                self.fetched_at = Some(Utc::now());
                self.apply_filter();
                tracing::debug!(
                    "Fetched {} documents from {}",
                    self.snapshot.len(),
                    self.collection
                );
            }
            Err(err) => {
                tracing::error!("Failed to fetch inventory from {}: {}", self.collection, err);
                self.notice = Some(Notice::error(FETCH_FAILED));
            }
        }
    }

    /// Add a new item, or restock an existing one by summing quantities.
    ///
    /// Validation failure raises an error notice and returns without
    /// touching the store or the form. A store attempt, successful or not,
    /// concludes by clearing the form and refreshing.
    pub async fn add(&mut self, name: &str, quantity: u64) {
        if let Err(err) = validate_entry(name, quantity) {
            self.notice = Some(Notice::error(err.message()));
            return;
        }

        self.submit_state = SubmitState::Submitting;
        match self.write_entry(name, quantity).await {
            Ok(()) => {
                tracing::info!("Added item {} (quantity: {})", name, quantity);
                self.notice = Some(Notice::success(ADD_SUCCEEDED));
            }
            Err(err) => {
                tracing::error!("Failed to add item {}: {}", name, err);
                self.notice = Some(Notice::error(ADD_FAILED));
            }
        }

        self.form.reset();
        self.refresh().await;
        self.submit_state = SubmitState::Idle;
    }

    /// Overwrite the quantity of the item keyed by `target`.
    pub async fn update(&mut self, target: &str, quantity: u64) {
        if let Err(err) = validate_entry(target, quantity) {
            self.notice = Some(Notice::error(err.message()));
            return;
        }

        self.submit_state = SubmitState::Submitting;
        let written = self
            .store
            .set(&self.collection, target, quantity_fields(quantity), true)
            .await;
        match written {
            Ok(()) => {
                tracing::info!("Updated item {} (quantity: {})", target, quantity);
                self.notice = Some(Notice::success(UPDATE_SUCCEEDED));
            }
            Err(err) => {
                tracing::error!("Failed to update item {}: {}", target, err);
                self.notice = Some(Notice::error(UPDATE_FAILED));
            }
        }

        self.form.reset();
        self.refresh().await;
        self.submit_state = SubmitState::Idle;
    }

    /// Delete the item keyed by `name`. Removing an absent name succeeds;
    /// the store's delete is idempotent.
    pub async fn remove(&mut self, name: &str) {
        self.submit_state = SubmitState::Submitting;
        match self.store.delete(&self.collection, name).await {
            Ok(()) => {
                tracing::info!("Removed item {}", name);
                self.notice = Some(Notice::success(REMOVE_SUCCEEDED));
            }
            Err(err) => {
                tracing::error!("Failed to remove item {}: {}", name, err);
                self.notice = Some(Notice::error(REMOVE_FAILED));
            }
        }

        self.refresh().await;
        self.submit_state = SubmitState::Idle;
    }

    /// Change the active search query and recompute the filtered view.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.apply_filter();
    }

    pub fn open_add_form(&mut self) {
        self.form.open_add();
    }

    /// Open the form pre-populated with `item`; its name becomes the locked
    /// update target.
    pub fn open_update_form(&mut self, item: Item) {
        self.form.open_update(item);
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    pub fn set_form_name(&mut self, name: impl Into<String>) {
        self.form.set_name(name);
    }

    pub fn set_form_quantity_input(&mut self, raw: &str) {
        self.form.set_quantity_input(raw);
    }

    /// Submit the form according to its mode.
    pub async fn submit(&mut self) {
        let quantity = self.form.quantity();
        match self.form.mode().clone() {
            FormMode::Add => {
                let name = self.form.name().to_owned();
                self.add(&name, quantity).await;
            }
            FormMode::Update { target } => {
                self.update(&target, quantity).await;
            }
        }
    }

    /// Restock-or-create write behind [`add`](Self::add). The store
    /// document, not the snapshot, is the source for the existing quantity.
    async fn write_entry(&self, name: &str, quantity: u64) -> Result<(), StoreError> {
        match self.store.get(&self.collection, name).await? {
            Some(fields) => {
                let current = quantity_from_fields(name, &fields);
                let total = current.saturating_add(quantity);
                self.store
                    .set(&self.collection, name, quantity_fields(total), true)
                    .await
            }
            None => {
                self.store
                    .set(&self.collection, name, quantity_fields(quantity), false)
                    .await
            }
        }
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_by_name(&self.snapshot, &self.search_query);
    }
}

/// Map one store document onto an [`Item`].
fn item_from_document(name: String, fields: &Fields) -> Item {
    let quantity = quantity_from_fields(&name, fields);
    Item { name, quantity }
}

/// Read the quantity field of a document. A missing or malformed value
/// (absent, negative, fractional, non-numeric) renders as 0 rather than
/// failing the whole fetch.
fn quantity_from_fields(name: &str, fields: &Fields) -> u64 {
    match fields.get(QUANTITY_FIELD).and_then(JsonValue::as_u64) {
        Some(quantity) => quantity,
        None => {
            tracing::warn!("Document {} has no usable quantity field, treating as 0", name);
            0
        }
    }
}

fn quantity_fields(quantity: u64) -> Fields {
    let mut fields = Fields::new();
    fields.insert(QUANTITY_FIELD.to_string(), JsonValue::from(quantity));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Fields {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn document_with_integer_quantity_maps_through() {
        let item = item_from_document("rice".to_string(), &doc(json!({"quantity": 7})));
        assert_eq!(item, Item::new("rice", 7));
    }

    #[test]
    fn malformed_quantities_render_as_zero() {
        for fields in [
            json!({}),
            json!({"quantity": "three"}),
            json!({"quantity": -2}),
            json!({"quantity": 3.5}),
            json!({"quantity": null}),
        ] {
            let item = item_from_document("rice".to_string(), &doc(fields.clone()));
            assert_eq!(item.quantity, 0, "fields {fields} should render as 0");
        }
    }

    #[test]
    fn quantity_fields_writes_the_single_field() {
        let fields = quantity_fields(5);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(QUANTITY_FIELD), Some(&json!(5)));
    }
}
