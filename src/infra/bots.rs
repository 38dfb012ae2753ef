use crate::domain::act::{ActRequest, ActType};
use crate::domain::chips::Chips;
use crate::domain::round::Round;
use crate::domain::PlayerId;
use crate::engine::validation::{min_raise_amount, possible_acts};
use crate::engine::RandomSource;

/// Случайное, но всегда допустимое действие для игрока, чей сейчас ход.
///
/// `None`, если игроку ходить нельзя (не его ход / раунд закрыт).
/// Используется стресс-тестами и dev-CLI.
pub fn random_act<R: RandomSource>(round: &Round, player_id: PlayerId, rng: &mut R) -> Option<ActRequest> {
    let acts = possible_acts(round, player_id).ok()?;
    let player = round.player(player_id)?;
    let act_type = acts[rng.pick_index(acts.len())];

    let bet = match act_type {
        ActType::Raise => {
            let min = min_raise_amount(player, &round.betting);
            Chips(rng.pick_between(min.0, player.stack.0))
        }
        ActType::AllIn => player.stack,
        ActType::Fold | ActType::Check | ActType::Call => Chips::ZERO,
    };

    Some(ActRequest::new(act_type, round.phase, bet))
}

/// Пассивный бот: check, если можно, иначе call, иначе fold.
pub fn passive_act(round: &Round, player_id: PlayerId) -> Option<ActRequest> {
    let acts = possible_acts(round, player_id).ok()?;
    let act_type = [ActType::Check, ActType::Call]
        .into_iter()
        .find(|t| acts.contains(t))
        .unwrap_or(ActType::Fold);

    Some(ActRequest::new(act_type, round.phase, Chips::ZERO))
}
