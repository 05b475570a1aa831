use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_data_connect::UploadResponse;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, post_form};

/// Multipart field the backend reads the file from
const FILE_FIELD: &str = "file";

/// API client for use case u501: uploads the sales history file
pub async fn upload_file(file: &File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Upload(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;

    post_form(&api_url("/product/data_connect"), form).await
}
