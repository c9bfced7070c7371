//! Suppliers screen.

use stockdesk_core::{DomainResult, Resource};
use stockdesk_parties::{Supplier, SupplierFilter};

use super::RecordScreen;
use crate::form::FormModel;

pub type SuppliersScreen = RecordScreen<Supplier, SupplierFilter>;

/// Reset state: blank text, `Goods`, `Active`.
impl FormModel for Supplier {
    type Record = Supplier;

    fn from_record(record: &Supplier) -> Self {
        record.without_id()
    }

    fn to_record(&self) -> DomainResult<Supplier> {
        Ok(self.without_id())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ScreenError;
    use stockdesk_client::{InMemoryResource, SharedResource};
    use stockdesk_core::StatusType;
    use stockdesk_parties::{ServiceType, SupplierId};

    fn acme() -> Supplier {
        Supplier {
            id: Some(SupplierId::from(1)),
            name: "Acme".to_string(),
            service_type: ServiceType::Logistics,
            contact: "acme@example.com".to_string(),
            address: "Av. Central 10".to_string(),
            details: "pallets".to_string(),
            state: StatusType::Active,
        }
    }

    fn screen_over(store: &Arc<InMemoryResource<Supplier>>) -> SuppliersScreen {
        let api: SharedResource<Supplier> = store.clone();
        SuppliersScreen::new(api)
    }

    #[tokio::test]
    async fn edit_cancel_save_leaves_the_original_untouched() {
        let store = Arc::new(InMemoryResource::with_rows(vec![acme()]));
        let mut screen = screen_over(&store);
        screen.load().await.unwrap();

        screen.edit(&SupplierId::from(1)).unwrap();
        screen.fields_mut().name = "Acme Renamed".to_string();
        screen.cancel();

        assert_eq!(screen.fields(), &Supplier::default());
        assert!(!screen.mode().is_editing());

        {
            let form = screen.fields_mut();
            form.name = "Tornillos SA".to_string();
            form.contact = "555-0199".to_string();
            form.address = "Jr. Lima 4".to_string();
            form.details = "bolts".to_string();
        }
        let saved = screen.save().await.unwrap();

        assert_eq!(saved.id, Some(SupplierId::from(2)));
        let rows = store.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], acme());
        assert_eq!(rows[1].name, "Tornillos SA");
        assert_eq!(screen.records().len(), 2);
    }

    #[tokio::test]
    async fn blank_form_is_rejected_before_any_request() {
        let store = Arc::new(InMemoryResource::with_rows(vec![acme()]));
        let mut screen = screen_over(&store);

        let err = screen.save().await.unwrap_err();

        assert!(matches!(err, ScreenError::Invalid(_)));
        assert_eq!(store.rows().unwrap(), vec![acme()]);
    }

    #[tokio::test]
    async fn create_resets_to_goods_and_active() {
        let store = Arc::new(InMemoryResource::new());
        let mut screen = screen_over(&store);

        {
            let form = screen.fields_mut();
            form.name = "Tornillos SA".to_string();
            form.service_type = ServiceType::Maintenance;
            form.contact = "555-0199".to_string();
            form.address = "Jr. Lima 4".to_string();
            form.details = "bolts".to_string();
        }
        let saved = screen.save().await.unwrap();

        assert_eq!(saved.id, Some(SupplierId::from(1)));
        assert_eq!(screen.records().len(), 1);
        assert_eq!(screen.fields().service_type, ServiceType::Goods);
        assert_eq!(screen.fields().state, StatusType::Active);
    }

    #[tokio::test]
    async fn deleting_the_edited_supplier_leaves_edit_mode() {
        let store = Arc::new(InMemoryResource::with_rows(vec![acme()]));
        let mut screen = screen_over(&store);
        screen.load().await.unwrap();
        screen.edit(&SupplierId::from(1)).unwrap();

        screen.delete(&SupplierId::from(1)).await.unwrap();

        assert!(!screen.mode().is_editing());
        assert!(screen.records().is_empty());
        assert_eq!(store.rows().unwrap()[0].state, StatusType::Inactive);
    }
}
