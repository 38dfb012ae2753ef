use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Состояние игрока внутри одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInRound {
    pub player_id: PlayerId,
    /// Фишки, которые ещё остались у игрока за столом.
    pub stack: Chips,
    /// Сколько всего игрок вложил в этот раунд (по всем фазам).
    pub committed: Chips,
    pub folded: bool,
    pub all_in: bool,
}

impl PlayerInRound {
    pub fn new(player_id: PlayerId, stack: Chips) -> Self {
        Self {
            player_id,
            stack,
            committed: Chips::ZERO,
            folded: false,
            // Игрок без фишек ставить уже не может.
            all_in: stack.is_zero(),
        }
    }

    /// Участвует ли игрок в борьбе за банк.
    pub fn is_in_round(&self) -> bool {
        !self.folded
    }

    /// Может ли игрок ещё что-то делать (не сфолдил и не в олл-ине).
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Сколько нужно доложить, чтобы уравнять `highest_bet`.
    pub fn to_call(&self, highest_bet: Chips) -> Chips {
        highest_bet.saturating_sub(self.committed)
    }

    /// Перенести фишки из стека в ставку. Больше стека взять нельзя.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.committed += real;
        if self.stack.is_zero() {
            self.all_in = true;
        }
        real
    }
}
