//! Filter-reactive list of active records.

use stockdesk_client::{ClientResult, SharedResource};
use stockdesk_core::{ListFilter, QueryParams, Resource, StatusType};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<F> {
    /// Every active record.
    #[default]
    Unfiltered,
    /// Records matching the filter, still restricted to the filter's lifecycle.
    Filtered(F),
}

/// Visible rows of one record family.
///
/// A row is visible when the server returned it for the filter's query, the
/// client-side predicate accepts it and its lifecycle is the requested one
/// (active unless the filter names another).
pub struct ListView<T: Resource, F: ListFilter<T>> {
    api: SharedResource<T>,
    state: ViewState<F>,
    records: Vec<T>,
}

impl<T: Resource, F: ListFilter<T>> ListView<T, F> {
    pub fn new(api: SharedResource<T>) -> Self {
        Self {
            api,
            state: ViewState::Unfiltered,
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState<F> {
        &self.state
    }

    pub fn filter(&self) -> Option<&F> {
        match &self.state {
            ViewState::Unfiltered => None,
            ViewState::Filtered(f) => Some(f),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn api(&self) -> &SharedResource<T> {
        &self.api
    }

    /// Refetch for the current state. On failure the previous rows are kept.
    pub async fn refresh(&mut self) -> ClientResult<&[T]> {
        let (query, filter) = match &self.state {
            ViewState::Unfiltered => (QueryParams::new(), F::default()),
            ViewState::Filtered(f) => (f.to_query(), f.clone()),
        };
        let lifecycle = filter.lifecycle().unwrap_or(StatusType::Active);

        let fetched = self.api.list(&query).await?;
        let total = fetched.len();
        self.records = fetched
            .into_iter()
            .filter(|r| filter.matches(r) && r.lifecycle() == lifecycle)
            .collect();

        tracing::debug!(
            resource = T::NAME,
            fetched = total,
            visible = self.records.len(),
            filtered = matches!(self.state, ViewState::Filtered(_)),
            "list refreshed"
        );
        Ok(&self.records)
    }

    /// Replace the filter and refetch. A filter with every field unset is a clear.
    pub async fn set_filter(&mut self, filter: F) -> ClientResult<&[T]> {
        self.state = if filter.is_empty() {
            ViewState::Unfiltered
        } else {
            ViewState::Filtered(filter)
        };
        self.refresh().await
    }

    pub async fn clear(&mut self) -> ClientResult<&[T]> {
        self.state = ViewState::Unfiltered;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use stockdesk_client::InMemoryResource;
    use stockdesk_inventory::{Inventory, InventoryFilter, InventoryId, ItemId};
    use stockdesk_parties::{Supplier, SupplierFilter, SupplierId};

    fn inventory(id: u64, stock: i64, status: StatusType) -> Inventory {
        Inventory {
            id: Some(InventoryId::from(id)),
            inventory_status: status,
            ..Inventory::for_item(ItemId::from(id), stock)
        }
    }

    #[tokio::test]
    async fn min_stock_filter_shows_only_active_rows_at_threshold() {
        let api: SharedResource<Inventory> = Arc::new(InMemoryResource::with_rows(vec![
            inventory(1, 5, StatusType::Active),
            inventory(2, 15, StatusType::Active),
            inventory(3, 20, StatusType::Inactive),
        ]));
        let mut view: ListView<Inventory, InventoryFilter> = ListView::new(api);

        view.refresh().await.unwrap();
        assert_eq!(view.records().len(), 2);

        let visible = view
            .set_filter(InventoryFilter {
                min_stock: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        let ids: Vec<_> = visible.iter().filter_map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![InventoryId::from(2)]);
        assert!(view.filter().is_some());

        view.clear().await.unwrap();
        assert_eq!(view.state(), &ViewState::Unfiltered);
        assert_eq!(view.records().len(), 2);
    }

    #[tokio::test]
    async fn empty_filter_is_a_clear() {
        let api: SharedResource<Inventory> =
            Arc::new(InMemoryResource::with_rows(vec![inventory(1, 5, StatusType::Active)]));
        let mut view: ListView<Inventory, InventoryFilter> = ListView::new(api);

        view.set_filter(InventoryFilter::default()).await.unwrap();

        assert_eq!(view.state(), &ViewState::Unfiltered);
        assert_eq!(view.records().len(), 1);
    }

    #[tokio::test]
    async fn explicit_lifecycle_filter_shows_inactive_rows() {
        let retired = Supplier {
            id: Some(SupplierId::from(1)),
            name: "Old Co".to_string(),
            service_type: Default::default(),
            contact: "-".to_string(),
            address: "-".to_string(),
            details: "-".to_string(),
            state: StatusType::Inactive,
        };
        let api: SharedResource<Supplier> = Arc::new(InMemoryResource::with_rows(vec![retired]));
        let mut view: ListView<Supplier, SupplierFilter> = ListView::new(api);

        assert!(view.refresh().await.unwrap().is_empty());

        let rows = view
            .set_filter(SupplierFilter {
                state: Some(StatusType::Inactive),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
