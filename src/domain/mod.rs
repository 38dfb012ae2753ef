//! Доменная модель раунда: фишки, игроки, фазы, действия, сам раунд.

pub mod act;
pub mod chips;
pub mod phase;
pub mod player;
pub mod round;

// Базовые идентификаторы
pub type PlayerId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use act::*;
pub use chips::*;
pub use phase::*;
pub use player::*;
pub use round::*;
