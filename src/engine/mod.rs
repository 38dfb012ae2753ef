//! Движок раунда: проверка действий, ставки, переход фаз.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `possible_acts` – что игрок может сделать сейчас
//!   - `save_act` – проверить и применить действие игрока
//!   - `start_round` / `apply_act` – то же самое без хранилища

pub mod betting;
pub mod errors;
pub mod history;
pub mod locks;
pub mod pot;
pub mod round_engine;
pub mod round_state;
pub mod validation;

pub use errors::{RoundError, RoundErrorKind};
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::Pot;
pub use round_engine::{AppliedAct, RoundEngine};
pub use round_state::{apply_act, start_round, RoundStatus, MAX_PLAYERS};
pub use validation::{min_raise_amount, possible_acts, validate_act};

/// Источник случайности для симуляций (выбор действия ботом и т.п.).
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Случайный индекс в диапазоне `0..len`. `len` > 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Случайное число в диапазоне `low..=high`.
    fn pick_between(&mut self, low: u64, high: u64) -> u64;
}
