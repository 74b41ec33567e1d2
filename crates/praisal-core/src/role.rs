//! Role model for the performance-management views.
//!
//! The role is resolved once by the session layer and passed explicitly to
//! every view that needs it; nothing here reads ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role within performance management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human-resources staff: full template management.
    Hr,
    /// People manager: read-only access to active templates.
    Manager,
    /// Everyone else: no access to template management.
    Employee,
}

impl Role {
    /// Whether this role may open the template listing at all.
    pub fn can_view_templates(self) -> bool {
        matches!(self, Role::Hr | Role::Manager)
    }

    /// Whether this role may create and delete templates.
    pub fn can_manage_templates(self) -> bool {
        matches!(self, Role::Hr)
    }

    /// Whether listings shown to this role are restricted to active
    /// templates.
    pub fn sees_only_active(self) -> bool {
        matches!(self, Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Hr => write!(f, "hr"),
            Role::Manager => write!(f, "manager"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, thiserror::Error)]
#[error("unknown role '{0}', expected one of: hr, manager, employee")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "hr" => Ok(Role::Hr),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            _ => Err(ParseRoleError(name.to_string())),
        }
    }
}
