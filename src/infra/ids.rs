use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{PlayerId, RoundId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Удобно для локальных тестов, dev-CLI и оффчейн-сервиса.
///
/// В Linera-контракте id раунда обычно приходит извне (его знает игровой сервис).
#[derive(Debug)]
pub struct IdGenerator {
    round_counter: AtomicU64,
    player_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Генератор, который начинает с `first` (например, после рестарта сервиса).
    pub fn starting_at(first: u64) -> Self {
        Self {
            round_counter: AtomicU64::new(first),
            player_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
