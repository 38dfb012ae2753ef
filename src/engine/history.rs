use serde::{Deserialize, Serialize};

use crate::domain::act::Act;
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::round::RoundOutcome;
use crate::domain::{PlayerId, RoundId};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Раунд создан, игроки рассажены.
    RoundStarted {
        round_id: RoundId,
        players: Vec<PlayerId>,
    },

    /// Принятое действие игрока.
    PlayerActed {
        act: Act,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Переход на новую фазу.
    PhaseChanged { phase: Phase },

    /// Раунд закрыт.
    RoundFinished { outcome: RoundOutcome },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: usize,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let index = self.events.len();
        self.events.push(RoundEvent { index, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
