//! Client helpers for the user-facing support endpoints. The admin side lives
//! in the admin feature.

use crate::{
    app_lib::{get_json, post_json, AppError},
    features::auth::types::MsgResponse,
    features::support::types::{NewTicketRequest, SupportTicket},
};

pub async fn create_ticket(
    request: &NewTicketRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/auth/support", request, token).await
}

pub async fn list_mine(token: Option<&str>) -> Result<Vec<SupportTicket>, AppError> {
    get_json("/auth/support", token).await
}
