use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Состояние ставок раунда в текущей фазе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Максимальная ставка, до которой должны дотянуться игроки.
    pub highest_bet: Chips,
    /// Минимальный размер повышающей части рейза.
    pub min_raise: Chips,
    /// Кто последним повысил ставку.
    pub last_aggressor: Option<PlayerId>,
    /// Очередь (в порядке мест), кто ещё должен походить в этой фазе.
    /// Голова очереди – игрок, чей сейчас ход.
    pub to_act: Vec<PlayerId>,
}

impl BettingState {
    pub fn new(highest_bet: Chips, min_raise: Chips, to_act: Vec<PlayerId>) -> Self {
        Self {
            highest_bet,
            min_raise,
            last_aggressor: None,
            to_act,
        }
    }

    /// Убрать игрока из очереди, если он там есть.
    pub fn mark_acted(&mut self, player_id: PlayerId) {
        self.to_act.retain(|p| *p != player_id);
    }

    /// Обновить состояние после повышения:
    /// - новая максимальная ставка;
    /// - min_raise растёт, только если повышение полноценное;
    /// - очередь перезапускается (её формирует движок).
    pub fn on_raise(
        &mut self,
        player_id: PlayerId,
        new_highest: Chips,
        raise_size: Chips,
        new_to_act: Vec<PlayerId>,
    ) {
        self.highest_bet = new_highest;
        if raise_size >= self.min_raise {
            self.min_raise = raise_size;
        }
        self.last_aggressor = Some(player_id);
        self.to_act = new_to_act;
    }

    /// Все, кому были должны ход, походили.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
