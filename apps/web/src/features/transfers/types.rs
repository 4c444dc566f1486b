use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomesticTransferRequest {
    pub beneficiary_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InternationalTransferRequest {
    pub beneficiary_id: i64,
    pub amount: f64,
    pub target_currency: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// FX quote returned by `GET /fx-rate?base=&target=`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FxRate {
    pub base: String,
    pub target: String,
    pub rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledTransfer {
    pub id: i64,
    pub beneficiary_name: String,
    pub amount: f64,
    pub frequency: String,
    pub next_run: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleTransferRequest {
    pub beneficiary_id: i64,
    pub amount: f64,
    /// `once`, `daily`, `weekly`, or `monthly`; validated server-side.
    pub frequency: String,
    pub start_date: String,
}
