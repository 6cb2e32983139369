use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APos,
        BloodGroup::ANeg,
        BloodGroup::BPos,
        BloodGroup::BNeg,
        BloodGroup::AbPos,
        BloodGroup::AbNeg,
        BloodGroup::OPos,
        BloodGroup::ONeg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "Whole Blood")]
    WholeBlood,
    #[serde(rename = "Red Blood Cells")]
    RedBloodCells,
    #[serde(rename = "Plasma")]
    Plasma,
    #[serde(rename = "Platelets")]
    Platelets,
    #[serde(rename = "Cryoprecipitate")]
    Cryoprecipitate,
}

impl ComponentType {
    pub const ALL: [ComponentType; 5] = [
        ComponentType::WholeBlood,
        ComponentType::RedBloodCells,
        ComponentType::Plasma,
        ComponentType::Platelets,
        ComponentType::Cryoprecipitate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::WholeBlood => "Whole Blood",
            ComponentType::RedBloodCells => "Red Blood Cells",
            ComponentType::Plasma => "Plasma",
            ComponentType::Platelets => "Platelets",
            ComponentType::Cryoprecipitate => "Cryoprecipitate",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BloodUnit {
    #[serde(rename = "_id")]
    pub id: String,
    pub unit_id: String,
    pub blood_group: BloodGroup,
    pub component_type: ComponentType,
    #[serde(default)]
    pub status: Option<String>,
    pub collection_date: String,
    pub expiry_date: String,
    #[serde(default)]
    pub blood_bank_id: Option<String>,
}

/// POST /api/blood-units body. Dates come straight from `<input type="date">`
/// as yyyy-mm-dd strings and are validated before anything touches the wire.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodUnit {
    pub unit_id: String,
    pub blood_group: String,
    pub component_type: String,
    pub collection_date: String,
    pub expiry_date: String,
    pub blood_bank_id: String,
    #[serde(default)]
    pub donor_id: String,
}

impl NewBloodUnit {
    /// Client-side validation, mirroring what the backend enforces: both
    /// dates must parse and expiry must fall strictly after collection.
    pub fn validate(&self) -> Result<(), String> {
        if self.unit_id.trim().is_empty() {
            return Err("Unit ID is required.".to_string());
        }
        let collection = NaiveDate::parse_from_str(&self.collection_date, "%Y-%m-%d")
            .map_err(|_| "Collection Date is not a valid date.".to_string())?;
        let expiry = NaiveDate::parse_from_str(&self.expiry_date, "%Y-%m-%d")
            .map_err(|_| "Expiry Date is not a valid date.".to_string())?;
        if expiry <= collection {
            return Err("Expiry Date must be after Collection Date.".to_string());
        }
        Ok(())
    }
}

/// One row of GET /api/blood-units/inventory-summary.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub blood_group: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(collection: &str, expiry: &str) -> NewBloodUnit {
        NewBloodUnit {
            unit_id: "BU-001".to_string(),
            blood_group: "A+".to_string(),
            component_type: "Whole Blood".to_string(),
            collection_date: collection.to_string(),
            expiry_date: expiry.to_string(),
            blood_bank_id: "bank1".to_string(),
            donor_id: String::new(),
        }
    }

    #[test]
    fn expiry_before_collection_is_rejected() {
        let err = unit("2024-06-01", "2024-05-01").validate().unwrap_err();
        assert!(err.contains("after Collection Date"));
    }

    #[test]
    fn expiry_equal_to_collection_is_rejected() {
        assert!(unit("2024-06-01", "2024-06-01").validate().is_err());
    }

    #[test]
    fn valid_date_order_passes() {
        assert!(unit("2024-06-01", "2024-07-13").validate().is_ok());
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(unit("not-a-date", "2024-07-13").validate().is_err());
    }

    #[test]
    fn blood_group_uses_display_names_on_the_wire() {
        assert_eq!(serde_json::to_string(&BloodGroup::AbNeg).unwrap(), "\"AB-\"");
        let parsed: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(parsed, BloodGroup::OPos);
    }
}
