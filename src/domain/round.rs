use serde::{Deserialize, Serialize};

use crate::domain::act::Act;
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::player::PlayerInRound;
use crate::domain::{PlayerId, RoundId};
use crate::engine::betting::BettingState;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::pot::Pot;

/// Настройки раунда, которые задаёт игровой сервис при создании.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    /// Минимальный шаг повышения (на сколько рейз должен превышать текущую ставку).
    pub min_raise: Chips,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            min_raise: Chips(1),
        }
    }
}

/// Игрок в момент создания раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatedPlayer {
    pub player_id: PlayerId,
    pub stack: Chips,
}

/// Всё, что нужно для создания раунда. Порядок `players` = порядок мест.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSetup {
    pub round_id: RoundId,
    pub config: RoundConfig,
    pub players: Vec<SeatedPlayer>,
}

/// Чем закончился раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Все, кроме одного, сфолдили – банк его без вскрытия.
    Uncontested { winner: PlayerId, amount: Chips },
    /// Дошли до шоудауна. Кто сильнее – решает внешний сервис оценки рук.
    Showdown {
        contenders: Vec<PlayerId>,
        pot: Chips,
    },
}

/// Состояние одного покерного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub config: RoundConfig,
    /// Игроки в порядке мест. Порядок фиксируется при создании.
    pub players: Vec<PlayerInRound>,
    pub phase: Phase,
    pub pot: Pot,
    pub betting: BettingState,
    pub history: RoundHistory,
    /// `Some` после закрытия раунда.
    pub outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerInRound> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut PlayerInRound> {
        self.players.iter_mut().find(|p| p.player_id == player_id)
    }

    /// Индекс места игрока.
    pub fn seat_of(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    /// Текущая максимальная ставка в раунде.
    pub fn highest_bet(&self) -> Chips {
        self.betting.highest_bet
    }

    pub fn is_closed(&self) -> bool {
        self.outcome.is_some() || !self.phase.is_betting()
    }

    /// Чей сейчас ход. `None` только у закрытого раунда.
    pub fn current_actor(&self) -> Option<PlayerId> {
        if self.is_closed() {
            return None;
        }
        self.betting.to_act.first().copied()
    }

    /// Сумма всех ставок игроков. Должна совпадать с банком.
    pub fn committed_total(&self) -> Chips {
        self.players.iter().map(|p| p.committed).sum()
    }

    /// Игроки, которые ещё не сфолдили.
    pub fn players_in_round(&self) -> impl Iterator<Item = &PlayerInRound> {
        self.players.iter().filter(|p| p.is_in_round())
    }

    /// Все принятые действия в порядке применения.
    pub fn acts(&self) -> impl Iterator<Item = &Act> {
        self.history.events.iter().filter_map(|e| match &e.kind {
            RoundEventKind::PlayerActed { act, .. } => Some(act),
            _ => None,
        })
    }
}
