use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use stockdesk_core::error::require_text;
use stockdesk_core::{DomainResult, Resource, StatusType};

stockdesk_core::record_id! {
    /// Supplier identifier (assigned by the REST collaborator).
    SupplierId
}

stockdesk_core::wire_enum! {
    /// What a supplier provides.
    ServiceType {
        Goods => "Goods",
        Maintenance => "Maintenance",
        Logistics => "Logistics",
        Consulting => "Consulting",
    }
    default Goods
}

/// Supplier (provider) record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SupplierId>,
    pub name: String,
    #[serde(default)]
    pub service_type: ServiceType,
    pub contact: String,
    pub address: String,
    pub details: String,
    #[serde(default)]
    pub state: StatusType,
}

impl Resource for Supplier {
    type Id = SupplierId;

    const PATH: &'static str = "suppliers";
    const NAME: &'static str = "supplier";

    fn id(&self) -> Option<&SupplierId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<SupplierId>) {
        self.id = id;
    }

    fn lifecycle(&self) -> StatusType {
        self.state
    }

    fn soft_delete_patch() -> JsonValue {
        json!({ "state": StatusType::Inactive.as_str() })
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("supplier name", &self.name)?;
        require_text("contact", &self.contact)?;
        require_text("address", &self.address)?;
        require_text("details", &self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_row_with_string_id() {
        let s: Supplier = serde_json::from_str(
            r#"{"id": "7d2c", "name": "Ferreteria Sur", "serviceType": "Logistics",
                "contact": "555-0101", "address": "Av. 1", "details": "weekly", "state": "Active"}"#,
        )
        .unwrap();
        assert_eq!(s.id.as_ref().map(ToString::to_string).as_deref(), Some("7d2c"));
        assert_eq!(s.service_type, ServiceType::Logistics);
        assert!(s.is_active());
    }

    #[test]
    fn validate_requires_every_text_field() {
        let s = Supplier {
            id: None,
            name: "Acme".to_string(),
            service_type: ServiceType::Goods,
            contact: "acme@example.com".to_string(),
            address: String::new(),
            details: "bolts".to_string(),
            state: StatusType::Active,
        };
        assert!(s.validate().is_err());
    }
}
