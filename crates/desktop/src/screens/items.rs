//! Items screen.

use stockdesk_core::{DomainResult, Resource};
use stockdesk_inventory::{Item, ItemFilter};

use super::RecordScreen;
use crate::form::FormModel;

pub type ItemsScreen = RecordScreen<Item, ItemFilter>;

/// Items are edited field for field; the reset state is `Item::default()`
/// (REGISTRABLE, FUNCTIONAL, DURABLES, UNITS, ACTIVE).
impl FormModel for Item {
    type Record = Item;

    fn from_record(record: &Item) -> Self {
        record.without_id()
    }

    fn to_record(&self) -> DomainResult<Item> {
        Ok(self.without_id())
    }
}
