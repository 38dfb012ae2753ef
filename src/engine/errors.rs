use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ActType, Chips, PlayerId, RoundId};

/// Ошибки движка раунда. Любая из них означает: состояние не изменилось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Раунд {0} не найден")]
    RoundNotFound(RoundId),

    #[error("Игрок {0} не участвует в раунде")]
    PlayerNotFound(PlayerId),

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Раунд {0} уже закрыт")]
    RoundClosed(RoundId),

    #[error("Действие {0} недопустимо в текущем состоянии раунда")]
    InvalidAct(ActType),

    #[error("Сумма {amount} вне допустимого диапазона [{min}, {max}]")]
    InvalidAmount { amount: Chips, min: Chips, max: Chips },

    #[error("Некорректные параметры раунда: {0}")]
    InvalidSetup(&'static str),
}

/// Дискриминатор ошибки – то, что видит внешний код (и мапит в HTTP-статус).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundErrorKind {
    RoundNotFound,
    PlayerNotFound,
    NotPlayersTurn,
    RoundClosed,
    InvalidAct,
    InvalidAmount,
    InvalidSetup,
}

impl RoundError {
    pub fn kind(&self) -> RoundErrorKind {
        match self {
            RoundError::RoundNotFound(_) => RoundErrorKind::RoundNotFound,
            RoundError::PlayerNotFound(_) => RoundErrorKind::PlayerNotFound,
            RoundError::NotPlayersTurn(_) => RoundErrorKind::NotPlayersTurn,
            RoundError::RoundClosed(_) => RoundErrorKind::RoundClosed,
            RoundError::InvalidAct(_) => RoundErrorKind::InvalidAct,
            RoundError::InvalidAmount { .. } => RoundErrorKind::InvalidAmount,
            RoundError::InvalidSetup(_) => RoundErrorKind::InvalidSetup,
        }
    }
}
