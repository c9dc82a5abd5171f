use reqwest::StatusCode;

/// Ошибки выбора мест на клиенте
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Seat {0} not found in the seat map")]
    SeatNotFound(String),

    #[error("Seat {0} is already occupied")]
    SeatOccupied(String),

    #[error("No seats selected")]
    EmptySelection,
}

/// Ошибки обращения к API кинотеатра
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Unauthorized: login required")]
    Unauthorized,

    #[error("Auth token is not a valid header value")]
    InvalidToken,

    #[error("Invalid booking request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        error_code: Option<String>,
        message: Option<String>,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP статус, если ошибка пришла от бэкенда
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Код ошибки бэкенда (errorCode в теле ответа)
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ClientError::Status { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// Ошибка сети, до бэкенда не достучались
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_connect() || e.is_timeout())
    }
}
