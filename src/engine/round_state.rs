use std::collections::HashSet;

use log::{debug, info};

use crate::domain::act::{Act, ActRequest, ActType};
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::player::PlayerInRound;
use crate::domain::round::{Round, RoundOutcome, RoundSetup};
use crate::domain::PlayerId;
use crate::engine::betting::BettingState;
use crate::engine::errors::RoundError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::pot::Pot;
use crate::engine::validation::validate_act;

/// Номер места передаётся клиенту как u8.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Статус раунда после применения действия.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundOutcome),
}

/// Создать новый раунд:
/// - проверяет состав игроков и конфиг;
/// - фиксирует порядок мест;
/// - ставит в очередь всех, у кого есть фишки.
pub fn start_round(setup: RoundSetup) -> Result<Round, RoundError> {
    if setup.players.len() < 2 {
        return Err(RoundError::InvalidSetup("нужно минимум два игрока"));
    }
    if setup.players.len() > MAX_PLAYERS {
        return Err(RoundError::InvalidSetup("слишком много игроков"));
    }
    if setup.config.min_raise.is_zero() {
        return Err(RoundError::InvalidSetup("min_raise должен быть больше нуля"));
    }

    let mut seen = HashSet::new();
    if !setup.players.iter().all(|p| seen.insert(p.player_id)) {
        return Err(RoundError::InvalidSetup("игрок посажен дважды"));
    }

    let players: Vec<PlayerInRound> = setup
        .players
        .iter()
        .map(|p| PlayerInRound::new(p.player_id, p.stack))
        .collect();

    let to_act = actionable_in_seat_order(&players, 0);
    if to_act.len() < 2 {
        return Err(RoundError::InvalidSetup("фишки есть меньше чем у двух игроков"));
    }

    let mut history = RoundHistory::new();
    history.push(RoundEventKind::RoundStarted {
        round_id: setup.round_id,
        players: players.iter().map(|p| p.player_id).collect(),
    });

    info!(
        "round {}: started with {} players, min_raise={}",
        setup.round_id,
        players.len(),
        setup.config.min_raise
    );

    Ok(Round {
        id: setup.round_id,
        betting: BettingState::new(Chips::ZERO, setup.config.min_raise, to_act),
        config: setup.config,
        players,
        phase: Phase::PreFlop,
        pot: Pot::new(),
        history,
        outcome: None,
    })
}

/// Применить действие игрока.
///
/// Сначала полная проверка; при ошибке `round` не меняется.
pub fn apply_act(
    round: &mut Round,
    player_id: PlayerId,
    request: ActRequest,
) -> Result<RoundStatus, RoundError> {
    validate_act(round, player_id, &request)?;

    let seat = round
        .seat_of(player_id)
        .ok_or(RoundError::PlayerNotFound(player_id))?;
    let highest_before = round.highest_bet();

    let (moved, stack_after, committed_after) = {
        let player = round
            .player_mut(player_id)
            .ok_or(RoundError::PlayerNotFound(player_id))?;

        let moved = match request.act_type {
            ActType::Fold => {
                player.folded = true;
                Chips::ZERO
            }
            ActType::Check => Chips::ZERO,
            ActType::Call => {
                let to_call = player.to_call(highest_before);
                player.commit(to_call)
            }
            ActType::Raise | ActType::AllIn => player.commit(request.bet),
        };

        (moved, player.stack, player.committed)
    };

    round.pot.add(moved);

    if committed_after > highest_before {
        // Ставка выросла → все остальные снова должны ответить.
        let raise_size = committed_after - highest_before;
        let reopened = actionable_in_seat_order(&round.players, seat + 1)
            .into_iter()
            .filter(|id| *id != player_id)
            .collect();
        round
            .betting
            .on_raise(player_id, committed_after, raise_size, reopened);
    } else {
        round.betting.mark_acted(player_id);
    }

    let act = Act {
        player_id,
        act_type: request.act_type,
        phase: round.phase,
        bet: moved,
    };

    debug!(
        "round {}: player {} {} {} (stack={}, pot={})",
        round.id, player_id, act.act_type, moved, stack_after, round.pot.total
    );

    round.history.push(RoundEventKind::PlayerActed {
        act,
        stack_after,
        pot_after: round.pot.total,
    });

    // Остался один – забирает банк без вскрытия.
    if round.players_in_round().count() == 1 {
        return Ok(finish_uncontested(round));
    }

    if round.betting.is_round_complete() {
        Ok(advance_phase(round))
    } else {
        Ok(RoundStatus::Ongoing)
    }
}

/// Переход фаз. Если ставить больше некому, докручиваем до шоудауна.
fn advance_phase(round: &mut Round) -> RoundStatus {
    loop {
        let next = match round.phase.next() {
            Some(next) => next,
            None => return finish_showdown(round),
        };

        round.phase = next;
        round.history.push(RoundEventKind::PhaseChanged { phase: next });
        info!("round {}: phase -> {}", round.id, next);

        if next == Phase::Showdown {
            return finish_showdown(round);
        }

        let to_act = actionable_in_seat_order(&round.players, 0);
        if to_act.len() >= 2 {
            round.betting = BettingState::new(round.betting.highest_bet, round.config.min_raise, to_act);
            return RoundStatus::Ongoing;
        }
    }
}

/// Завершение без шоудауна (все сфолдили, остался один).
fn finish_uncontested(round: &mut Round) -> RoundStatus {
    let winner = round
        .players_in_round()
        .map(|p| p.player_id)
        .next()
        .unwrap_or_default();

    round.phase = Phase::Showdown;
    round.history.push(RoundEventKind::PhaseChanged {
        phase: Phase::Showdown,
    });

    let outcome = RoundOutcome::Uncontested {
        winner,
        amount: round.pot.total,
    };
    close(round, outcome)
}

/// Шоудаун: кто выиграл, решает внешняя оценка рук.
fn finish_showdown(round: &mut Round) -> RoundStatus {
    round.phase = Phase::Showdown;
    let contenders = round.players_in_round().map(|p| p.player_id).collect();

    let outcome = RoundOutcome::Showdown {
        contenders,
        pot: round.pot.total,
    };
    close(round, outcome)
}

fn close(round: &mut Round, outcome: RoundOutcome) -> RoundStatus {
    round.betting.to_act.clear();
    round.outcome = Some(outcome.clone());
    round.history.push(RoundEventKind::RoundFinished {
        outcome: outcome.clone(),
    });
    info!("round {}: finished, {:?}", round.id, outcome);
    RoundStatus::Finished(outcome)
}

/// Игроки, которые ещё могут действовать, по кругу начиная с места `start`.
fn actionable_in_seat_order(players: &[PlayerInRound], start: usize) -> Vec<PlayerId> {
    let n = players.len();
    (0..n)
        .map(|i| &players[(start + i) % n])
        .filter(|p| p.can_act())
        .map(|p| p.player_id)
        .collect()
}
