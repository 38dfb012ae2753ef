//! Движок покерного раунда на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим RoundsState.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};
use crate::state::RoundsState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RoundOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Пока не нужны – пустой enum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RoundMessage {}

/// Запросы к сервису (read-only).
pub type RoundQuery = Query;

/// Ответы на запросы.
pub type RoundResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct RoundAbi;

impl ContractAbi for RoundAbi {
    type Operation = RoundOperation;
    type Response = ();
}

impl ServiceAbi for RoundAbi {
    type Query = RoundQuery;
    type QueryResponse = RoundResponse;
}

/// Тип состояния, который используют contract.rs и service.rs.
pub type Storage = RoundsState;
