use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

use super::protocol::{
    CatalogListResponse, ErrorResponse, MutationResponse, RecordResponse, ValidationErrorResponse,
};
use super::types::CatalogKind;
use super::validate::validate_record;
use crate::store::error::StoreError;
use crate::store::file::JsonStore;

fn client_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}

fn validation_error(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse {
            status: "Validation Failed".to_string(),
            message,
        }),
    )
        .into_response()
}

pub async fn handle_list_catalog(
    Path(kind): Path<String>,
    Extension(store): Extension<Arc<JsonStore>>,
) -> Response {
    let kind: CatalogKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => return client_error(StatusCode::NOT_FOUND, "URL Not Found"),
    };

    let data = store.list(kind).await;
    (
        StatusCode::OK,
        Json(CatalogListResponse {
            data,
            status: "Success".to_string(),
        }),
    )
        .into_response()
}

pub async fn handle_get_record(
    Path((kind, title)): Path<(String, String)>,
    Extension(store): Extension<Arc<JsonStore>>,
) -> Response {
    let kind: CatalogKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => return client_error(StatusCode::NOT_FOUND, "Data Not Found"),
    };

    match store.find(kind, &title).await {
        Ok(record) => (
            StatusCode::OK,
            Json(RecordResponse {
                data: record,
                message: "Success".to_string(),
            }),
        )
            .into_response(),
        Err(StoreError::NotFound { .. }) => {
            client_error(StatusCode::NOT_FOUND, "Data Not Found")
        }
        Err(e) => {
            tracing::error!("Failed to look up record {:?}: {}", title, e);
            server_error()
        }
    }
}

pub async fn handle_create_record(
    Path(kind): Path<String>,
    Extension(store): Extension<Arc<JsonStore>>,
    Json(body): Json<Value>,
) -> Response {
    let kind: CatalogKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => return client_error(StatusCode::NOT_FOUND, "URL Not Found"),
    };

    let record = match validate_record(&body) {
        Ok(record) => record,
        Err(message) => {
            tracing::debug!("Rejected create in {}: {}", kind.as_str(), message);
            return validation_error(message);
        }
    };

    match store.create(kind, record).await {
        Ok(data) => (
            StatusCode::CREATED,
            Json(CatalogListResponse {
                data,
                status: "Success".to_string(),
            }),
        )
            .into_response(),
        Err(StoreError::DuplicateTitle { .. }) => {
            client_error(StatusCode::BAD_REQUEST, "Data Already Existed")
        }
        Err(e) => {
            tracing::error!("Failed to create record in {}: {}", kind.as_str(), e);
            server_error()
        }
    }
}

pub async fn handle_update_record(
    Path((kind, title)): Path<(String, String)>,
    Extension(store): Extension<Arc<JsonStore>>,
    Json(body): Json<Value>,
) -> Response {
    let kind: CatalogKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => return client_error(StatusCode::NOT_FOUND, "Data Not Found"),
    };

    let record = match validate_record(&body) {
        Ok(record) => record,
        Err(message) => {
            tracing::debug!("Rejected update of {:?}: {}", title, message);
            return validation_error(message);
        }
    };

    match store.update(kind, &title, record).await {
        Ok(data) => (
            StatusCode::OK,
            Json(MutationResponse {
                data,
                message: "Success".to_string(),
            }),
        )
            .into_response(),
        Err(StoreError::NotFound { .. }) => {
            client_error(StatusCode::NOT_FOUND, "Data Not Found")
        }
        Err(e) => {
            tracing::error!("Failed to update record {:?}: {}", title, e);
            server_error()
        }
    }
}

pub async fn handle_delete_record(
    Path((kind, title)): Path<(String, String)>,
    Extension(store): Extension<Arc<JsonStore>>,
) -> Response {
    let kind: CatalogKind = match kind.parse() {
        Ok(kind) => kind,
        Err(_) => return client_error(StatusCode::NOT_FOUND, "Data Not Found"),
    };

    match store.delete(kind, &title).await {
        Ok(data) => (
            StatusCode::OK,
            Json(MutationResponse {
                data,
                message: "Success".to_string(),
            }),
        )
            .into_response(),
        Err(StoreError::NotFound { .. }) => {
            client_error(StatusCode::NOT_FOUND, "Data Not Found")
        }
        Err(e) => {
            tracing::error!("Failed to delete record {:?}: {}", title, e);
            server_error()
        }
    }
}
