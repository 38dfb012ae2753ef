use serde::{Deserialize, Serialize};

use crate::domain::act::ActType;
use crate::domain::{PlayerId, RoundId};

use super::dto::RoundViewDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// `GET /rounds/{roundId}/players/{playerId}/possible-acts`.
    PossibleActs {
        round_id: RoundId,
        player_id: PlayerId,
    },

    /// Получить состояние раунда.
    GetRound { round_id: RoundId },

    /// Список id всех раундов.
    ListRounds,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    PossibleActs(Vec<ActType>),
    Round(RoundViewDto),
    Rounds(Vec<RoundId>),
}
