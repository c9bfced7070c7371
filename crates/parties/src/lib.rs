//! People records: employees and suppliers (providers).
//!
//! Record shapes, client-side validation and list filters. No IO.

pub mod employee;
pub mod filter;
pub mod supplier;

pub use employee::{DocumentType, Employee, EmployeeId, EmployeeType, parse_clock};
pub use filter::{EmployeeFilter, SupplierFilter};
pub use supplier::{ServiceType, Supplier, SupplierId};
