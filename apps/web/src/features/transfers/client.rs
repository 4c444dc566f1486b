//! Client helpers for transfer endpoints. FX conversion, limits, and fraud
//! checks all run server-side; the FX quote here is a display preview only.

use crate::{
    app_lib::{delete_json, get_json, post_json, AppError},
    features::auth::types::MsgResponse,
    features::transfers::types::{
        DomesticTransferRequest, FxRate, InternationalTransferRequest, ScheduleTransferRequest,
        ScheduledTransfer,
    },
};

pub async fn send_domestic(
    request: &DomesticTransferRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/transfer/domestic", request, token).await
}

pub async fn send_international(
    request: &InternationalTransferRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/transfer/international", request, token).await
}

pub async fn fx_rate(base: &str, target: &str, token: Option<&str>) -> Result<FxRate, AppError> {
    get_json(&format!("/fx-rate?base={base}&target={target}"), token).await
}

pub async fn list_scheduled(token: Option<&str>) -> Result<Vec<ScheduledTransfer>, AppError> {
    get_json("/transfer/scheduled", token).await
}

pub async fn schedule(
    request: &ScheduleTransferRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/transfer/scheduled", request, token).await
}

pub async fn cancel_scheduled(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    delete_json(&format!("/transfer/scheduled/{id}"), token).await
}
