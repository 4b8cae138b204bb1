//! `larder-app` — the inventory controller and its UI-facing state.
//!
//! The presentation layer (an external collaborator) renders the controller's
//! filtered view and drives its operations; all store access funnels through
//! [`InventoryController`].

pub mod controller;
pub mod form;
pub mod notice;

pub use controller::{InventoryController, SubmitState, PANTRY_COLLECTION, QUANTITY_FIELD};
pub use form::{FormMode, ItemForm};
pub use notice::{Notice, NoticeKind};
