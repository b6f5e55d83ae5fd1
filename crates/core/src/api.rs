//! JSON bodies exchanged with the dashboard backend
//!
//! Only the wire shapes live here; the backend itself (accounts, storage,
//! message delivery) is a separate service.
//!
//! | Endpoint                  | Request               | Response      |
//! |---------------------------|-----------------------|---------------|
//! | `POST /api/register`      | [`RegisterRequest`]   | [`ApiResponse`] |
//! | `POST /api/login`         | [`LoginRequest`]      | [`ApiResponse`] |
//! | `POST /api/trigger-alert` | [`TriggerAlertRequest`] | ignored     |

use crate::core_types::weather::AlertTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration form rejected before it is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// No role was selected
    MissingRole,
    /// A required text field is blank
    MissingField(&'static str),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::MissingRole => write!(f, "Please select a valid Role."),
            RegisterError::MissingField(field) => write!(f, "Please enter your {field}."),
        }
    }
}

impl std::error::Error for RegisterError {}

/// Account registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full name shown on the dashboard
    pub name: String,
    /// Account role picked from the role selector
    pub role: String,
    /// Optional contact address, empty when not given
    #[serde(default)]
    pub email: String,
    /// Mobile number bulletins are delivered to
    pub phone: String,
    pub password: String,
}

impl RegisterRequest {
    /// Check the form the way the registration page does before posting
    ///
    /// # Errors
    /// Returns `RegisterError::MissingRole` for a blank role and
    /// `RegisterError::MissingField` for a blank name, phone or password.
    pub fn validate(&self) -> Result<(), RegisterError> {
        if self.role.trim().is_empty() {
            return Err(RegisterError::MissingRole);
        }
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("password", &self.password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RegisterError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Login form; `phone` accepts either a phone number or an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Phone number or email address
    pub phone: String,
    pub password: String,
}

/// Manual alert broadcast request
///
/// Only yellow and orange alerts are sent; a clear reset stays local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAlertRequest {
    /// Alert tier to broadcast, never `Clear`
    pub level: AlertTier,
    /// Full location name from the selector
    pub location: String,
}

impl TriggerAlertRequest {
    /// Request body for a manual alert, `None` for `Clear`
    pub fn new(level: AlertTier, location: impl Into<String>) -> Option<Self> {
        match level {
            AlertTier::Clear => None,
            AlertTier::Yellow | AlertTier::Orange => Some(TriggerAlertRequest {
                level,
                location: location.into(),
            }),
        }
    }
}

/// Outcome reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
    Ignored,
}

/// Generic `{status, message}` reply
///
/// A successful login carries `user` and `role` instead of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Display name of the logged-in account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Role of the logged-in account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ApiResponse {
    /// Successful reply with a message
    pub fn success(message: impl Into<String>) -> Self {
        ApiResponse {
            status: ApiStatus::Success,
            message: Some(message.into()),
            user: None,
            role: None,
        }
    }

    /// Failed reply with a message
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            status: ApiStatus::Error,
            message: Some(message.into()),
            user: None,
            role: None,
        }
    }

    /// Successful login reply naming the account and its role
    pub fn logged_in(user: impl Into<String>, role: impl Into<String>) -> Self {
        ApiResponse {
            status: ApiStatus::Success,
            message: None,
            user: Some(user.into()),
            role: Some(role.into()),
        }
    }

    /// Whether the backend accepted the request
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}
