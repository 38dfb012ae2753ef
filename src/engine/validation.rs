use crate::domain::act::{ActRequest, ActType};
use crate::domain::chips::Chips;
use crate::domain::player::PlayerInRound;
use crate::domain::round::Round;
use crate::domain::PlayerId;
use crate::engine::betting::BettingState;
use crate::engine::errors::RoundError;

/// Какие действия доступны игроку прямо сейчас.
///
/// Ничего не меняет. Порядок: FOLD, CHECK, CALL, RAISE, ALL_IN.
pub fn possible_acts(round: &Round, player_id: PlayerId) -> Result<Vec<ActType>, RoundError> {
    let player = ensure_players_turn(round, player_id)?;
    Ok(legal_acts(player, round.highest_bet()))
}

/// Последняя проверка заявки перед применением.
pub fn validate_act(round: &Round, player_id: PlayerId, request: &ActRequest) -> Result<(), RoundError> {
    let player = ensure_players_turn(round, player_id)?;

    // Заявка из другой фазы – клиент смотрит на устаревшее состояние.
    if request.phase != round.phase {
        return Err(RoundError::InvalidAct(request.act_type));
    }

    let to_call = player.to_call(round.highest_bet());
    if !is_legal(request.act_type, player, to_call) {
        return Err(RoundError::InvalidAct(request.act_type));
    }

    match request.act_type {
        ActType::Raise => {
            let min = min_raise_amount(player, &round.betting);
            let max = player.stack;
            if request.bet < min || request.bet > max {
                return Err(RoundError::InvalidAmount {
                    amount: request.bet,
                    min,
                    max,
                });
            }
            Ok(())
        }
        // All-in – это всегда весь стек, не больше и не меньше.
        ActType::AllIn => {
            if request.bet != player.stack {
                return Err(RoundError::InvalidAmount {
                    amount: request.bet,
                    min: player.stack,
                    max: player.stack,
                });
            }
            Ok(())
        }
        ActType::Fold | ActType::Check | ActType::Call => Ok(()),
    }
}

/// Минимальная сумма RAISE: докрыть ставку + минимальный шаг.
/// Если стека не хватает на полный шаг, можно поставить весь стек.
pub fn min_raise_amount(player: &PlayerInRound, betting: &BettingState) -> Chips {
    let to_call = player.to_call(betting.highest_bet);
    (to_call + betting.min_raise).min(player.stack)
}

/// Общие предусловия: игрок сидит за столом, раунд открыт, сейчас его ход.
fn ensure_players_turn(round: &Round, player_id: PlayerId) -> Result<&PlayerInRound, RoundError> {
    let player = round
        .player(player_id)
        .ok_or(RoundError::PlayerNotFound(player_id))?;

    if round.is_closed() {
        return Err(RoundError::RoundClosed(round.id));
    }

    if round.current_actor() != Some(player_id) {
        return Err(RoundError::NotPlayersTurn(player_id));
    }

    Ok(player)
}

fn legal_acts(player: &PlayerInRound, highest_bet: Chips) -> Vec<ActType> {
    let to_call = player.to_call(highest_bet);
    ActType::ALL
        .into_iter()
        .filter(|t| is_legal(*t, player, to_call))
        .collect()
}

fn is_legal(act_type: ActType, player: &PlayerInRound, to_call: Chips) -> bool {
    match act_type {
        ActType::Fold => true,
        ActType::Check => to_call.is_zero(),
        ActType::Call => !to_call.is_zero() && player.stack >= to_call,
        // Стек ровно на колл: CALL можно, RAISE – уже нечем.
        ActType::Raise => player.stack > to_call,
        ActType::AllIn => !player.stack.is_zero(),
    }
}
