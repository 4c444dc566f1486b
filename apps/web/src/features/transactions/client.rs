//! Client helpers for the transaction history endpoints.

use crate::{
    app_lib::{get_json, get_text, AppError},
    features::transactions::types::Transaction,
};

pub async fn list_mine(token: Option<&str>) -> Result<Vec<Transaction>, AppError> {
    get_json("/history/my-transactions", token).await
}

/// Fetches the CSV export of the caller's history as plain text; the route
/// turns it into a download.
pub async fn download_csv(token: Option<&str>) -> Result<String, AppError> {
    get_text("/history/my-transactions/download?format=csv", token).await
}
