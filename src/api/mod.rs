//! Внешний API движка раундов.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (создать раунд, действие игрока);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — структуры для клиента;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - права (auth.rs), маршруты (routes.rs) и исполнение (handler.rs).

pub mod auth;
pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;
pub mod routes;

pub use auth::*;
pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
pub use queries::*;
pub use routes::*;
