use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use stockdesk_core::error::require_text;
use stockdesk_core::{DomainError, DomainResult, Resource, StatusType};

stockdesk_core::record_id! {
    /// Employee identifier (assigned by the REST collaborator).
    EmployeeId
}

stockdesk_core::wire_enum! {
    EmployeeType {
        Admin => "Admin",
        Technician => "Technician",
        Operator => "Operator",
        Warehouse => "Warehouse",
    }
    default Admin
}

stockdesk_core::wire_enum! {
    /// Identity document kind.
    DocumentType {
        Dni => "DNI",
        Passport => "Passport",
        ForeignerCard => "ForeignerCard",
    }
    default Dni
}

/// Employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub employee_type: EmployeeType,
    #[serde(default)]
    pub doc_type: DocumentType,
    pub doc_number: String,
    #[serde(with = "calendar_date")]
    pub hiring_date: NaiveDate,
    /// Shift start, `HH:MM`.
    pub entry_time: String,
    /// Shift end, `HH:MM`.
    pub exit_time: String,
    pub salary: f64,
    #[serde(default)]
    pub state: StatusType,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

impl Resource for Employee {
    type Id = EmployeeId;

    const PATH: &'static str = "employees";
    const NAME: &'static str = "employee";

    fn id(&self) -> Option<&EmployeeId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<EmployeeId>) {
        self.id = id;
    }

    fn lifecycle(&self) -> StatusType {
        self.state
    }

    fn soft_delete_patch() -> JsonValue {
        json!({ "state": StatusType::Inactive.as_str() })
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("first name", &self.first_name)?;
        require_text("last name", &self.last_name)?;
        require_text("document number", &self.doc_number)?;
        parse_clock("entry time", &self.entry_time)?;
        parse_clock("exit time", &self.exit_time)?;
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(DomainError::validation("salary must be a non-negative number"));
        }
        Ok(())
    }
}

/// Parse a wall-clock time as typed into a time input (`HH:MM` or `HH:MM:SS`).
pub fn parse_clock(field: &str, value: &str) -> DomainResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| DomainError::validation(format!("{field} must be HH:MM, got '{value}'")))
}

/// Dates travel as `YYYY-MM-DD`; full timestamps written by older clients
/// are accepted and truncated to their calendar date.
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
            .map_err(serde::de::Error::custom)
    }
}
