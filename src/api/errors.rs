use serde::{Deserialize, Serialize};

use crate::engine::{RoundError, RoundErrorKind};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// У вызывающего нет нужной роли / он действует не за себя.
    Forbidden(String),

    /// Ошибка движка раунда.
    Round { kind: RoundErrorKind, message: String },

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl ApiError {
    /// HTTP-статус, которым эта ошибка уходит клиенту.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Forbidden(_) => 403,
            ApiError::Round { kind, .. } => match kind {
                RoundErrorKind::RoundNotFound | RoundErrorKind::PlayerNotFound => 404,
                RoundErrorKind::NotPlayersTurn | RoundErrorKind::RoundClosed => 409,
                RoundErrorKind::InvalidAct | RoundErrorKind::InvalidAmount => 422,
                RoundErrorKind::InvalidSetup => 400,
            },
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<RoundError> for ApiError {
    fn from(err: RoundError) -> Self {
        ApiError::Round {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
