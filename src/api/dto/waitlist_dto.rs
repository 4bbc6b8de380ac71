//! Waitlist DTOs for signup and count.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::SignupReceipt;

/// Confirmation message returned on an accepted signup.
pub const SIGNUP_MESSAGE: &str = "Successfully joined waitlist";

/// Request body for `POST /api/waitlist`.
///
/// Both fields are optional at the serde level so that an absent field is
/// reported as a validation error (400) instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SignupRequest {
    /// Entrant name. Trimmed; must be non-empty.
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// Entrant email. Trimmed and lower-cased; must be a valid address.
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

/// Response body for `POST /api/waitlist` (201 Created).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    /// Confirmation message.
    pub message: String,
    /// Total number of entries right after this signup.
    pub position: i64,
}

impl From<SignupReceipt> for SignupResponse {
    fn from(receipt: SignupReceipt) -> Self {
        Self {
            message: SIGNUP_MESSAGE.to_string(),
            position: receipt.position,
        }
    }
}

/// Response body for `GET /api/waitlist/count`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    /// Total number of waitlist entries.
    pub count: i64,
}
