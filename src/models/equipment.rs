//! Equipment model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Equipment record as persisted and served over the wire.
///
/// The four descriptive fields are optional because an update replaces the
/// stored record with exactly the fields the client supplied; a field the
/// client omitted is absent from the record afterwards, not merged from the
/// previous value. `skip_serializing_if` keeps absent fields out of the
/// persisted JSON as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type (suggested values: Machine, Vessel, Tank, Mixer); stored as free text
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    /// Status (Active, Inactive, Under Maintenance); stored as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Last cleaned date, YYYY-MM-DD
    #[serde(rename = "lastCleaned", skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<String>,
}

/// Create equipment request.
///
/// All fields are optional at the deserialization layer so that a missing
/// field reaches the service, which rejects the request with a 400 rather
/// than a deserialization failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "lastCleaned", skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<String>,
}

/// Update equipment request. Any subset of fields; an `id` in the body is
/// ignored, the path id always wins.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "lastCleaned", skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<String>,
}

impl Equipment {
    /// Build the replacement record for an update: path id plus exactly the
    /// supplied fields.
    pub fn from_update(id: i64, data: &UpdateEquipment) -> Self {
        Self {
            id,
            name: data.name.clone(),
            equipment_type: data.equipment_type.clone(),
            status: data.status.clone(),
            last_cleaned: data.last_cleaned.clone(),
        }
    }
}
