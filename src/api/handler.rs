//! Исполнение команд и запросов поверх `RoundEngine`.
//!
//! Права проверяются здесь, до движка: движок про роли ничего не знает.

use crate::domain::RoundId;
use crate::engine::RoundEngine;
use crate::infra::mapping::{act_request_from_dto, map_round_to_dto, setup_from_command};
use crate::infra::persistence::RoundRepository;

use super::auth::{Caller, Role};
use super::commands::Command;
use super::dto::{CommandResponse, RoundViewDto};
use super::errors::ApiError;
use super::queries::{Query, QueryResponse};

/// Выполнить команду от имени `caller`.
pub fn handle_command<S: RoundRepository>(
    engine: &RoundEngine<S>,
    caller: &Caller,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateRound(cmd) => {
            caller.require_role(Role::Admin)?;
            let round = engine.create_round(setup_from_command(&cmd))?;
            Ok(CommandResponse::RoundCreated(map_round_to_dto(&round)))
        }

        Command::SaveAct(cmd) => {
            caller.require_player(cmd.player_id)?;
            let request = act_request_from_dto(&cmd.act);
            let applied = engine.save_act(
                cmd.round_id,
                cmd.player_id,
                request.act_type,
                request.phase,
                request.bet,
            )?;
            Ok(CommandResponse::ActAccepted {
                act: cmd.act,
                round: map_round_to_dto(&applied.round),
            })
        }
    }
}

/// Публичное представление раунда для клиента.
pub fn round_view<S: RoundRepository>(
    engine: &RoundEngine<S>,
    round_id: RoundId,
) -> Result<RoundViewDto, ApiError> {
    let round = engine.round(round_id)?;
    Ok(map_round_to_dto(&round))
}

/// Выполнить запрос "только чтение".
pub fn handle_query<S: RoundRepository>(
    engine: &RoundEngine<S>,
    caller: &Caller,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::PossibleActs {
            round_id,
            player_id,
        } => {
            caller.require_player_or_admin(player_id)?;
            let acts = engine.possible_acts(round_id, player_id)?;
            Ok(QueryResponse::PossibleActs(acts))
        }

        Query::GetRound { round_id } => {
            if !caller.has_role(Role::User) {
                caller.require_role(Role::Admin)?;
            }
            Ok(QueryResponse::Round(round_view(engine, round_id)?))
        }

        Query::ListRounds => {
            caller.require_role(Role::Admin)?;
            Ok(QueryResponse::Rounds(engine.storage().round_ids()))
        }
    }
}
