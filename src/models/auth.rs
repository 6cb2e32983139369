use serde::{Deserialize, Serialize};

use crate::models::profile::Address;

/// Account kinds recognized by the backend. A token may carry a role string
/// this build does not know; that parses as `Unknown` and routes to the
/// unknown-role terminal view instead of being rejected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Donor,
    Hospital,
    Doctor,
    BloodbankStaff,
    Supervisor,
    Admin,
    Unknown,
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Role::parse(&s))
    }
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Donor,
        Role::Hospital,
        Role::Doctor,
        Role::BloodbankStaff,
        Role::Supervisor,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Hospital => "hospital",
            Role::Doctor => "doctor",
            Role::BloodbankStaff => "bloodbank_staff",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Role {
        match s {
            "donor" => Role::Donor,
            "hospital" => Role::Hospital,
            "doctor" => Role::Doctor,
            "bloodbank_staff" => Role::BloodbankStaff,
            "supervisor" => Role::Supervisor,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    /// Human label for nav buttons ("Donor Dashboard" etc), capitalizing the
    /// raw role string.
    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Identity derived from the token payload.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub address: Address,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Generic `{ "msg": ... }` body the backend uses for errors and acks.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }

    #[test]
    fn unrecognized_role_parses_as_unknown() {
        assert_eq!(Role::parse("alien"), Role::Unknown);
        let parsed: Role = serde_json::from_str("\"alien\"").unwrap();
        assert_eq!(parsed, Role::Unknown);
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::BloodbankStaff).unwrap(),
            "\"bloodbank_staff\""
        );
    }
}
