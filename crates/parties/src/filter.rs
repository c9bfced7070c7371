//! List filters for employees and suppliers.
//!
//! Query parameter mapping:
//!
//! | filter field                   | query parameter | client-side check       |
//! |--------------------------------|-----------------|-------------------------|
//! | `EmployeeFilter::employee_type`| `employeeType`  | equality                |
//! | `EmployeeFilter::doc_type`     | `docType`       | equality                |
//! | `EmployeeFilter::state`        | `state`         | lifecycle override      |
//! | `SupplierFilter::service_type` | `serviceType`   | equality                |
//! | `SupplierFilter::state`        | `state`         | lifecycle override      |
//! | `SupplierFilter::contact`      | `contact`       | equality (trimmed)      |

use stockdesk_core::{ListFilter, QueryParams, StatusType};

use crate::employee::{DocumentType, Employee, EmployeeType};
use crate::supplier::{ServiceType, Supplier};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub employee_type: Option<EmployeeType>,
    pub doc_type: Option<DocumentType>,
    /// Explicit lifecycle; unset means active only.
    pub state: Option<StatusType>,
}

impl ListFilter<Employee> for EmployeeFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("employeeType", self.employee_type)
            .push_opt("docType", self.doc_type)
            .push_opt("state", self.state);
        q
    }

    fn matches(&self, employee: &Employee) -> bool {
        self.employee_type.is_none_or(|t| employee.employee_type == t)
            && self.doc_type.is_none_or(|d| employee.doc_type == d)
    }

    fn lifecycle(&self) -> Option<StatusType> {
        self.state
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub service_type: Option<ServiceType>,
    /// Explicit lifecycle; unset means active only.
    pub state: Option<StatusType>,
    pub contact: Option<String>,
}

impl ListFilter<Supplier> for SupplierFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("serviceType", self.service_type)
            .push_opt("state", self.state)
            .push_opt("contact", self.contact.as_deref().map(str::trim));
        q
    }

    fn matches(&self, supplier: &Supplier) -> bool {
        let contact = self
            .contact
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        self.service_type.is_none_or(|t| supplier.service_type == t)
            && contact.is_none_or(|c| supplier.contact.trim() == c)
    }

    fn lifecycle(&self) -> Option<StatusType> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_filter_uses_camel_case_parameters() {
        let f = EmployeeFilter {
            employee_type: Some(EmployeeType::Operator),
            state: Some(StatusType::Inactive),
            ..Default::default()
        };
        let q = f.to_query();
        assert_eq!(q.get("employeeType"), Some("Operator"));
        assert_eq!(q.get("state"), Some("Inactive"));
        assert_eq!(q.get("docType"), None);
        assert_eq!(f.lifecycle(), Some(StatusType::Inactive));
    }

    #[test]
    fn blank_contact_is_not_a_filter() {
        let f = SupplierFilter {
            contact: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(ListFilter::<Supplier>::is_empty(&f));
    }
}
