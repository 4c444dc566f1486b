use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub bank_account_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Creation payload. Optional contact fields are sent as empty strings, the
/// shape the API expects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewBeneficiary {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub bank_account_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub is_favorite: bool,
}
