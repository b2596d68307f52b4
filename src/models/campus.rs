//! Campus model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use super::fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    #[serde(deserialize_with = "fields::id")]
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Backend fields this crate does not model, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or replacing a campus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusInput {
    pub name: String,
    pub address: String,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Campus {
    /// Build the full record sent on update, keeping unmodelled fields
    pub fn with_input(&self, input: CampusInput) -> Campus {
        Campus {
            id: self.id,
            name: input.name,
            address: input.address,
            description: input.description,
            image_url: input.image_url,
            extra: self.extra.clone(),
        }
    }

    /// Editable part of the record, e.g. to prefill an edit form
    pub fn to_input(&self) -> CampusInput {
        CampusInput {
            name: self.name.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl CampusInput {
    /// Trim required text and fold blank optionals into `None`
    pub fn normalized(self) -> Self {
        use crate::utils::helpers::blank_to_none;
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            description: blank_to_none(self.description),
            image_url: blank_to_none(self.image_url.map(|u| u.trim().to_string())),
        }
    }
}
