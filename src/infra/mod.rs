//! Инфраструктурный слой вокруг движка раундов:
//! - генерация ID;
//! - RNG-реализации и боты для симуляций;
//! - хранилище раундов (off-chain / тесты);
//! - маппинги между API и domain.

pub mod bots;
pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use bots::*;
pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
