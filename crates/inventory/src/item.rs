use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use stockdesk_core::error::require_text;
use stockdesk_core::{DomainResult, Resource, StatusType};

stockdesk_core::record_id! {
    /// Item identifier (assigned by the REST collaborator).
    ItemId
}

stockdesk_core::wire_enum! {
    /// Whether the item is tracked individually.
    ItemType {
        Registrable => "REGISTRABLE",
        NonRegistrable => "NON_REGISTRABLE",
    }
    default Registrable
}

stockdesk_core::wire_enum! {
    /// Physical condition of the item.
    ItemStatus {
        Functional => "FUNCTIONAL",
        Defective => "DEFECTIVE",
        UnderRepair => "UNDER_REPAIR",
    }
    default Functional
}

stockdesk_core::wire_enum! {
    ItemCategory {
        Durables => "DURABLES",
        Consumables => "CONSUMABLES",
        MaterialsConstruction => "MATERIALS_CONSTRUCTION",
        Others => "OTHERS",
    }
    default Durables
}

stockdesk_core::wire_enum! {
    MeasurementUnit {
        Liters => "LITERS",
        Kilos => "KILOS",
        Units => "UNITS",
    }
    default Units
}

stockdesk_core::wire_enum! {
    /// Item lifecycle (logical deletion).
    ///
    /// Items are created with the upper-case spelling but soft-deleted with
    /// the mixed-case one shared by the other resources, so both are read.
    ItemLifecycle {
        #[serde(alias = "Active")]
        Active => "ACTIVE",
        #[serde(alias = "Inactive")]
        Inactive => "INACTIVE",
    }
    default Active
}

impl From<ItemLifecycle> for StatusType {
    fn from(value: ItemLifecycle) -> Self {
        match value {
            ItemLifecycle::Active => StatusType::Active,
            ItemLifecycle::Inactive => StatusType::Inactive,
        }
    }
}

/// Stock item record.
///
/// Every field except the identifier tolerates being absent on the wire so a
/// half-written row from the mock server still decodes; views decide what to
/// do with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    /// Business identifier (serial number, asset tag) for registrable items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub category: ItemCategory,
    #[serde(default)]
    pub measurement_unit: MeasurementUnit,
    #[serde(default)]
    pub item_status: ItemLifecycle,
}

impl Item {
    /// New active item with default classification.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Resource for Item {
    type Id = ItemId;

    const PATH: &'static str = "items";
    const NAME: &'static str = "item";

    fn id(&self) -> Option<&ItemId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<ItemId>) {
        self.id = id;
    }

    fn lifecycle(&self) -> StatusType {
        self.item_status.into()
    }

    fn soft_delete_patch() -> JsonValue {
        json!({ "item_status": StatusType::Inactive.as_str() })
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("item name", &self.name)
    }
}
