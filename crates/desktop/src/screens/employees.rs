//! Employees screen.

use chrono::NaiveDate;

use stockdesk_core::{DomainError, DomainResult, StatusType};
use stockdesk_parties::{DocumentType, Employee, EmployeeFilter, EmployeeType, parse_clock};

use super::RecordScreen;
use crate::form::FormModel;

pub type EmployeesScreen = RecordScreen<EmployeeForm, EmployeeFilter>;

/// Employee form fields. Shift times are kept as typed (`HH:MM`).
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub employee_type: EmployeeType,
    pub doc_type: DocumentType,
    pub doc_number: String,
    pub hiring_date: Option<NaiveDate>,
    pub entry_time: String,
    pub exit_time: String,
    pub salary: f64,
    pub state: StatusType,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            employee_type: EmployeeType::default(),
            doc_type: DocumentType::default(),
            doc_number: String::new(),
            hiring_date: None,
            entry_time: "08:00".to_string(),
            exit_time: "17:00".to_string(),
            salary: 0.0,
            state: StatusType::Active,
        }
    }
}

impl FormModel for EmployeeForm {
    type Record = Employee;

    fn from_record(e: &Employee) -> Self {
        Self {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            employee_type: e.employee_type,
            doc_type: e.doc_type,
            doc_number: e.doc_number.clone(),
            hiring_date: Some(e.hiring_date),
            entry_time: e.entry_time.clone(),
            exit_time: e.exit_time.clone(),
            salary: e.salary,
            state: e.state,
        }
    }

    fn to_record(&self) -> DomainResult<Employee> {
        let hiring_date = self
            .hiring_date
            .ok_or_else(|| DomainError::validation("hiring date is required"))?;
        let clock = |field, value: &str| parse_clock(field, value).map(|t| t.format("%H:%M").to_string());

        Ok(Employee {
            id: None,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            employee_type: self.employee_type,
            doc_type: self.doc_type,
            doc_number: self.doc_number.trim().to_string(),
            hiring_date,
            entry_time: clock("entry time", &self.entry_time)?,
            exit_time: clock("exit time", &self.exit_time)?,
            salary: self.salary,
            state: self.state,
        })
    }
}
