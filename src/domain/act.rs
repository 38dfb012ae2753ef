use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::PlayerId;

/// Тип действия игрока.
///
/// Порядок объявления = порядок в списке возможных действий.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActType {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl ActType {
    pub const ALL: [ActType; 5] = [
        ActType::Fold,
        ActType::Check,
        ActType::Call,
        ActType::Raise,
        ActType::AllIn,
    ];

    /// Имеет ли смысл сумма ставки для этого типа действия.
    pub fn carries_amount(self) -> bool {
        matches!(self, ActType::Raise | ActType::AllIn)
    }
}

impl fmt::Display for ActType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActType::Fold => "FOLD",
            ActType::Check => "CHECK",
            ActType::Call => "CALL",
            ActType::Raise => "RAISE",
            ActType::AllIn => "ALL_IN",
        };
        f.write_str(s)
    }
}

/// Заявка на действие, как её присылает игрок: ещё не проверена движком.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActRequest {
    pub act_type: ActType,
    /// Фаза, в которой игрок считает, что действует.
    pub phase: Phase,
    /// Сколько фишек игрок добавляет (только для RAISE / ALL_IN).
    pub bet: Chips,
}

impl ActRequest {
    pub fn new(act_type: ActType, phase: Phase, bet: Chips) -> Self {
        Self {
            act_type,
            phase,
            bet,
        }
    }
}

/// Принятое действие. После записи в историю раунда не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Act {
    pub player_id: PlayerId,
    pub act_type: ActType,
    pub phase: Phase,
    /// Сколько фишек реально ушло в банк этим действием.
    pub bet: Chips,
}
