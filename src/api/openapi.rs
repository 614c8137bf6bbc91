use utoipa::OpenApi;

use crate::errors::{ErrorCode, ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guard Raise Error Envelope",
        version = "0.1.0",
        description = "JSON body returned for an HttpError. `message` is safe to show to end users; `details` carries the diagnostic payload (statusCode, errorCode, userMessage).",
    ),
    components(
        schemas(
            ErrorCode,
            ErrorDetail,
            ErrorResponse,
        )
    ),
    tags(
        (name = "errors", description = "Error envelope shared by every endpoint"),
    )
)]
pub struct ErrorApiDoc;
