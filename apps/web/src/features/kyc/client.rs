//! Client helpers for KYC endpoints. The upload is multipart form data; the
//! document never touches application state outside the form element.

use web_sys::FormData;

use crate::{
    app_lib::{get_json, post_form, AppError},
    features::auth::types::MsgResponse,
    features::kyc::types::KycStatus,
};

pub async fn status(token: Option<&str>) -> Result<KycStatus, AppError> {
    get_json("/kyc/status", token).await
}

pub async fn upload(
    document_type: &str,
    file: &web_sys::File,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    let form = FormData::new()
        .map_err(|_| AppError::Config("Failed to build upload form.".to_string()))?;
    form.append_with_str("document_type", document_type)
        .map_err(|_| AppError::Config("Failed to build upload form.".to_string()))?;
    form.append_with_blob_and_filename("document", file, &file.name())
        .map_err(|_| AppError::Config("Failed to build upload form.".to_string()))?;

    post_form("/kyc/upload", &form, token).await
}
