// Wire types for the listing backend.
//
// The backend owns these shapes; the client holds an immutable snapshot
// per fetch, so the wire shape doubles as the domain model. Field names
// match the JSON payloads exactly.

use serde::{Deserialize, Serialize};

/// A property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Absent when no photo was uploaded; renderers substitute a placeholder.
    #[serde(default)]
    pub image_url: Option<String>,
    pub house_type_id: i64,
    /// Denormalized category, when the backend joins it in.
    #[serde(default)]
    pub house_type: Option<HouseType>,
    /// Denormalized assigned agent, when one exists.
    #[serde(default)]
    pub agent: Option<ListingAgent>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A listing category (backend calls these house types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseType {
    pub id: i64,
    pub name: String,
}

/// An agent as returned by `api/agents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The agent attribution nested inside a listing payload.
///
/// Denormalized: name and photo only, no id on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAgent {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ListingAgent {
    /// Display name, e.g. `"Jane Doe"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Agent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
