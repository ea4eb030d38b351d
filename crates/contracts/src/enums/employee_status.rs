use serde::{Deserialize, Serialize};

/// Employee account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<EmployeeStatus> {
        vec![EmployeeStatus::Active, EmployeeStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(EmployeeStatus::Active),
            "inactive" => Some(EmployeeStatus::Inactive),
            _ => None,
        }
    }
}
