//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status returned alongside this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::MemberNotFound => StatusCode::NOT_FOUND,

            Self::MemberNameExists => StatusCode::CONFLICT,

            Self::NotAuthenticated | Self::InvalidCredentials | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            Self::AdminRequired => StatusCode::FORBIDDEN,

            Self::MemberNameEmpty | Self::InvalidDate | Self::InvalidRankingWindow => {
                StatusCode::BAD_REQUEST
            }

            Self::MalformedRecord | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
