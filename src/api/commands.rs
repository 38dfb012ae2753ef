use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, RoundId};

use super::dto::{ActDto, SeatedPlayerDto};

/// Команда верхнего уровня (всё, что меняет состояние).
///
/// Эти команды превращаются в операции (`RoundOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать раунд (вызывает игровой сервис при старте сессии).
    CreateRound(CreateRoundCommand),

    /// Действие игрока: `POST /rounds/{roundId}/players/{playerId}/acts`.
    SaveAct(SaveActCommand),
}

/// Команда создания раунда.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateRoundCommand {
    pub round_id: RoundId,
    /// Минимальный шаг рейза.
    pub min_raise: Chips,
    /// Игроки в порядке мест.
    pub players: Vec<SeatedPlayerDto>,
}

/// Действие игрока в раунде.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveActCommand {
    pub round_id: RoundId,
    pub player_id: PlayerId,
    pub act: ActDto,
}
