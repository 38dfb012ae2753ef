use serde::{Deserialize, Serialize};

use crate::domain::act::ActType;
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::round::RoundOutcome;
use crate::domain::{PlayerId, RoundId};

use super::errors::ApiError;

/// Тело запроса на действие: `{"type": "RAISE", "phase": "FLOP", "bet": 20}`.
///
/// Тот же объект возвращается клиенту как эхо принятого действия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActDto {
    #[serde(rename = "type")]
    pub act_type: ActType,
    pub phase: Phase,
    /// Для FOLD / CHECK / CALL можно не передавать.
    #[serde(default)]
    pub bet: Chips,
}

impl ActDto {
    /// Разобрать JSON-тело запроса.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::BadRequest(format!("битое тело действия: {e}")))
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Internal(e.to_string()))
    }
}

/// Действие из истории раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedActDto {
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub act_type: ActType,
    pub phase: Phase,
    pub bet: Chips,
}

/// DTO игрока в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInRoundDto {
    pub player_id: PlayerId,
    pub seat_index: u8,
    pub stack: Chips,
    pub committed: Chips,
    pub folded: bool,
    pub all_in: bool,
}

/// Публичное представление раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub round_id: RoundId,
    pub phase: Phase,
    pub pot: Chips,
    pub highest_bet: Chips,
    pub min_raise: Chips,
    /// Кто последним повысил ставку в текущей фазе.
    pub last_aggressor: Option<PlayerId>,
    /// Чей ход (если раунд открыт).
    pub current_actor: Option<PlayerId>,
    pub players: Vec<PlayerInRoundDto>,
    pub acts: Vec<RecordedActDto>,
    pub outcome: Option<RoundOutcome>,
}

/// Игрок при создании раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatedPlayerDto {
    pub player_id: PlayerId,
    pub stack: Chips,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создан новый раунд.
    RoundCreated(RoundViewDto),

    /// Действие принято (HTTP 201): эхо действия + раунд после него.
    ActAccepted { act: ActDto, round: RoundViewDto },
}
