//! Ручной маппинг между API-DTO и доменом. Поле за полем, без магии.

use crate::api::commands::CreateRoundCommand;
use crate::api::dto::{ActDto, PlayerInRoundDto, RecordedActDto, RoundViewDto};
use crate::domain::act::{Act, ActRequest};
use crate::domain::chips::Chips;
use crate::domain::player::PlayerInRound;
use crate::domain::round::{Round, RoundConfig, RoundSetup, SeatedPlayer};

/// Тело запроса → заявка на действие.
/// Для FOLD / CHECK / CALL присланная сумма игнорируется.
pub fn act_request_from_dto(dto: &ActDto) -> ActRequest {
    let bet = if dto.act_type.carries_amount() {
        dto.bet
    } else {
        Chips::ZERO
    };
    ActRequest::new(dto.act_type, dto.phase, bet)
}

pub fn act_to_dto(act: &Act) -> RecordedActDto {
    RecordedActDto {
        player_id: act.player_id,
        act_type: act.act_type,
        phase: act.phase,
        bet: act.bet,
    }
}

pub fn player_to_dto(seat_index: usize, player: &PlayerInRound) -> PlayerInRoundDto {
    PlayerInRoundDto {
        player_id: player.player_id,
        // Больше MAX_PLAYERS мест start_round не допускает.
        seat_index: u8::try_from(seat_index).unwrap_or(u8::MAX),
        stack: player.stack,
        committed: player.committed,
        folded: player.folded,
        all_in: player.all_in,
    }
}

/// Раунд → публичное представление.
pub fn map_round_to_dto(round: &Round) -> RoundViewDto {
    RoundViewDto {
        round_id: round.id,
        phase: round.phase,
        pot: round.pot.total,
        highest_bet: round.betting.highest_bet,
        min_raise: round.betting.min_raise,
        last_aggressor: round.betting.last_aggressor,
        current_actor: round.current_actor(),
        players: round
            .players
            .iter()
            .enumerate()
            .map(|(idx, p)| player_to_dto(idx, p))
            .collect(),
        acts: round.acts().map(act_to_dto).collect(),
        outcome: round.outcome.clone(),
    }
}

/// Команда создания → параметры нового раунда.
pub fn setup_from_command(cmd: &CreateRoundCommand) -> RoundSetup {
    RoundSetup {
        round_id: cmd.round_id,
        config: RoundConfig {
            min_raise: cmd.min_raise,
        },
        players: cmd
            .players
            .iter()
            .map(|p| SeatedPlayer {
                player_id: p.player_id,
                stack: p.stack,
            })
            .collect(),
    }
}
