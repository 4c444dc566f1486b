use serde::{Deserialize, Serialize};

/// Profile record returned by `GET /user/me`. Card fields are demo wallet
/// card data; the CVC never leaves the server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_expiry: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone_number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
