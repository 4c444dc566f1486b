use serde::{Deserialize, Serialize};

/// Wallet summary returned by `GET /wallet`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: f64,
    pub currency: String,
    #[serde(default)]
    pub daily_limit: Option<f64>,
    #[serde(default)]
    pub monthly_limit: Option<f64>,
    #[serde(default)]
    pub spent_today: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateLimitsRequest {
    pub daily_limit: f64,
    pub monthly_limit: f64,
}
