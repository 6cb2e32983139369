use serde::{Deserialize, Serialize};

use crate::models::profile::Address;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub address: Address,
}

/// POST /api/blood-banks body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodBank {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: Address,
}

impl NewBloodBank {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Blood bank name is required.".to_string());
        }
        Ok(())
    }
}
