use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum CalendarApiError {
    Google(StatusCode, ErrorDetail),
    Internal(ApiError),
}

impl From<ApiError> for CalendarApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                match serde_json::from_str::<ErrorResponse>(&detail) {
                    Ok(response) => CalendarApiError::Google(status, response.error),
                    // Not every error body is the documented JSON shape
                    Err(_) => CalendarApiError::Google(
                        status,
                        ErrorDetail {
                            code: status.as_u16(),
                            message: detail,
                            status: None,
                        },
                    ),
                }
            }
            e => CalendarApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for CalendarApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarApiError::Internal(e) => write!(f, "Internal error: {}", e),
            CalendarApiError::Google(status, detail) => {
                write!(f, "({}) {}", status, detail.message)
            }
        }
    }
}

impl std::error::Error for CalendarApiError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
