//! Shared DTOs for identities, profiles and the credential exchange.
//!
//! DESIGN
//! ======
//! These types are both the persisted session schema and the wire schema of
//! `/api/auth/verify`, so the host and the browser agree on one definition.
//! Role parsing is strict: anything outside the three known roles fails to
//! deserialize, which the session store treats as corruption.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access role of an authenticated principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Organizer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Organizer, Role::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Organizer => "organizer",
            Role::Admin => "admin",
        }
    }

    /// Landing route for this role after sign-in.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Organizer => "/organizer",
            Role::Admin => "/admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Organizer => "Organizer",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "organizer" => Ok(Role::Organizer),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// An authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    /// University-issued user number.
    pub usernumber: String,
    pub role: Role,
}

/// Optional descriptive data about an [`Identity`].
///
/// Every field except `name` is role-dependent: students carry academic
/// fields and a registration count, organizers a created-events count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_events: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_events: Option<u32>,
}

/// Sign-in request forwarded to the backend verification procedure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_number: String,
    pub user_type: Role,
    pub password: String,
}

/// Successful verification result: the identity plus its profile, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Public settings the host hands the browser at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Websocket endpoint of the realtime service, including its access key.
    pub realtime_url: String,
    /// Broadcast channel name used for connectivity tracking.
    pub channel: String,
}
