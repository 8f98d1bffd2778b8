pub mod routes;

use actix_web::HttpResponse;

use crate::content::application::ports::outgoing::StoreError;
use crate::shared::api::ApiResponse;

/// Uniform mapping from store failures to responses, shared by every route
/// that fronts the remote document store.
pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::Unauthorized => ApiResponse::forbidden(
            "PASSWORD_REJECTED",
            "Content store rejected the owner password",
        ),
        StoreError::Transport(_) => ApiResponse::bad_gateway(
            "CONTENT_STORE_UNAVAILABLE",
            "Content store could not be reached",
        ),
        StoreError::Rejected(_) => ApiResponse::bad_gateway(
            "CONTENT_STORE_ERROR",
            "Content store rejected the request",
        ),
    }
}
