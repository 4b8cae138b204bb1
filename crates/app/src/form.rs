//! Entry form state behind the add/update modal.

use larder_core::Item;

/// Whether a submitted form creates (or restocks) an entry, or corrects an
/// existing item's quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Fresh entry; an existing name restocks additively.
    Add,
    /// Quantity correction for the named item. The name field is locked.
    Update { target: String },
}

/// State of the entry modal.
///
/// `quantity` holds the last parsed value of the quantity input; raw input
/// that does not parse as a whole non-negative number counts as 0, which
/// validation then rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    visible: bool,
    mode: FormMode,
    name: String,
    quantity: u64,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            visible: false,
            mode: FormMode::Add,
            name: String::new(),
            quantity: 0,
        }
    }
}

impl ItemForm {
    /// Open the modal for a fresh entry.
    pub fn open_add(&mut self) {
        self.visible = true;
        self.mode = FormMode::Add;
        self.name.clear();
        self.quantity = 0;
    }

    /// Open the modal pre-populated with an existing item. The item's name
    /// becomes the update target and the name field is locked.
    pub fn open_update(&mut self, item: Item) {
        self.visible = true;
        self.name = item.name.clone();
        self.mode = FormMode::Update { target: item.name };
        self.quantity = item.quantity;
    }

    /// Hide the modal. Field values are kept, matching a dismissed dialog.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Clear everything after a submission attempt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Type into the name field. Ignored in update mode; an existing item's
    /// name is immutable.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if matches!(self.mode, FormMode::Update { .. }) {
            return;
        }
        self.name = name.into();
    }

    /// Type into the quantity field (lenient parse; malformed input counts
    /// as 0).
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.quantity = raw.trim().parse().unwrap_or(0);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_update(&self) -> bool {
        matches!(self.mode, FormMode::Update { .. })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_mode_allows_typing_a_name() {
        let mut form = ItemForm::default();
        form.open_add();
        form.set_name("rice");
        assert_eq!(form.name(), "rice");
        assert!(!form.is_update());
    }

    #[test]
    fn update_mode_locks_the_name() {
        let mut form = ItemForm::default();
        form.open_update(Item::new("rice", 4));
        form.set_name("wheat");

        assert_eq!(form.name(), "rice");
        assert_eq!(form.mode(), &FormMode::Update { target: "rice".to_string() });
        assert_eq!(form.quantity(), 4);
    }

    #[test]
    fn quantity_input_parses_leniently() {
        let mut form = ItemForm::default();

        form.set_quantity_input("7");
        assert_eq!(form.quantity(), 7);

        form.set_quantity_input(" 3 ");
        assert_eq!(form.quantity(), 3);

        for malformed in ["", "abc", "-2", "3.5", "12abc"] {
            form.set_quantity_input(malformed);
            assert_eq!(form.quantity(), 0, "input {malformed:?} should count as 0");
        }
    }

    #[test]
    fn close_keeps_field_values() {
        let mut form = ItemForm::default();
        form.open_add();
        form.set_name("rice");
        form.set_quantity_input("3");
        form.close();

        assert!(!form.is_visible());
        assert_eq!(form.name(), "rice");
        assert_eq!(form.quantity(), 3);
    }

    #[test]
    fn open_add_clears_a_previous_update_entry() {
        let mut form = ItemForm::default();
        form.open_update(Item::new("rice", 4));
        form.open_add();

        assert!(form.is_visible());
        assert!(!form.is_update());
        assert_eq!(form.name(), "");
        assert_eq!(form.quantity(), 0);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut form = ItemForm::default();
        form.open_update(Item::new("rice", 4));
        form.reset();

        assert_eq!(form, ItemForm::default());
    }
}
