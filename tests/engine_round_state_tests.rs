// tests/engine_round_state_tests.rs

//! Тесты применения действий и перехода фаз:
//! - рейз/колл двигают банк и ставки;
//! - рейз заново открывает торговлю для остальных;
//! - фолд до одного игрока → шоудаун без вскрытия;
//! - олл-ины докручивают раунд до шоудауна;
//! - история фиксирует каждое действие.

use poker_round_engine::domain::{
    ActRequest, ActType, Chips, Phase, PlayerId, Round, RoundConfig, RoundOutcome, RoundSetup,
    SeatedPlayer,
};
use poker_round_engine::engine::{apply_act, possible_acts, start_round, RoundEventKind, RoundStatus};

fn make_round(stacks: &[u64], min_raise: u64) -> Round {
    let setup = RoundSetup {
        round_id: 5,
        config: RoundConfig {
            min_raise: Chips(min_raise),
        },
        players: stacks
            .iter()
            .enumerate()
            .map(|(i, s)| SeatedPlayer {
                player_id: i as PlayerId + 1,
                stack: Chips(*s),
            })
            .collect(),
    };
    start_round(setup).expect("start_round failed")
}

fn act(round: &mut Round, player_id: PlayerId, act_type: ActType, bet: u64) -> RoundStatus {
    let phase = round.phase;
    let status = apply_act(round, player_id, ActRequest::new(act_type, phase, Chips(bet)))
        .unwrap_or_else(|e| panic!("{act_type} от игрока {player_id} не прошёл: {e}"));

    // Банк всегда равен сумме ставок.
    assert_eq!(round.pot.total, round.committed_total());
    status
}

//
// Базовый heads-up сценарий
//

#[test]
fn raise_then_call_moves_chips_and_opens_the_flop() {
    let mut round = make_round(&[100, 100], 10);
    assert_eq!(round.current_actor(), Some(1));
    assert_eq!(round.phase, Phase::PreFlop);

    act(&mut round, 1, ActType::Raise, 20);
    assert_eq!(round.highest_bet(), Chips(20));
    assert_eq!(round.pot.total, Chips(20));
    assert_eq!(round.current_actor(), Some(2));

    let acts = possible_acts(&round, 2).expect("possible_acts failed");
    assert!(acts.contains(&ActType::Call));
    assert!(acts.contains(&ActType::Raise));

    let status = act(&mut round, 2, ActType::Call, 0);
    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(round.pot.total, Chips(40));
    assert_eq!(round.player(1).unwrap().committed, Chips(20));
    assert_eq!(round.player(2).unwrap().committed, Chips(20));
    assert_eq!(round.player(2).unwrap().stack, Chips(80));

    // Все уравняли → флоп, ходит первый по месту.
    assert_eq!(round.phase, Phase::Flop);
    assert_eq!(round.current_actor(), Some(1));
    assert!(possible_acts(&round, 1).unwrap().contains(&ActType::Check));
}

#[test]
fn checks_around_walk_every_phase_to_showdown() {
    let mut round = make_round(&[100, 100, 100], 10);

    for phase in [Phase::PreFlop, Phase::Flop, Phase::Turn, Phase::River] {
        assert_eq!(round.phase, phase);
        act(&mut round, 1, ActType::Check, 0);
        act(&mut round, 2, ActType::Check, 0);
        let status = act(&mut round, 3, ActType::Check, 0);
        if phase == Phase::River {
            assert!(matches!(status, RoundStatus::Finished(_)));
        }
    }

    assert_eq!(round.phase, Phase::Showdown);
    assert_eq!(
        round.outcome,
        Some(RoundOutcome::Showdown {
            contenders: vec![1, 2, 3],
            pot: Chips::ZERO,
        })
    );
    assert_eq!(round.current_actor(), None);
}

//
// Рейз заново открывает торговлю
//

#[test]
fn raise_reopens_action_for_players_who_already_matched() {
    let mut round = make_round(&[100, 100, 100], 10);

    act(&mut round, 1, ActType::Check, 0);
    act(&mut round, 2, ActType::Check, 0);
    act(&mut round, 3, ActType::Raise, 30);

    // Оба, кто уже чекнул, снова должны ответить, начиная со следующего за рейзером.
    assert_eq!(round.betting.to_act, vec![1, 2]);
    assert_eq!(round.current_actor(), Some(1));
    assert_eq!(round.phase, Phase::PreFlop);

    act(&mut round, 1, ActType::Call, 0);
    assert_eq!(round.current_actor(), Some(2));
    assert!(possible_acts(&round, 2).unwrap().contains(&ActType::Call));

    act(&mut round, 2, ActType::Call, 0);
    assert_eq!(round.phase, Phase::Flop);
    assert_eq!(round.pot.total, Chips(90));
}

#[test]
fn re_raise_returns_action_to_the_original_raiser() {
    let mut round = make_round(&[200, 200], 10);

    act(&mut round, 1, ActType::Raise, 20);
    act(&mut round, 2, ActType::Raise, 60);

    assert_eq!(round.highest_bet(), Chips(60));
    assert_eq!(round.betting.min_raise, Chips(40));
    assert_eq!(round.current_actor(), Some(1));

    act(&mut round, 1, ActType::Call, 0);
    assert_eq!(round.phase, Phase::Flop);
    assert_eq!(round.pot.total, Chips(120));
}

#[test]
fn folded_and_all_in_players_are_skipped() {
    let mut round = make_round(&[100, 50, 100, 100], 10);

    act(&mut round, 1, ActType::Raise, 20);
    act(&mut round, 2, ActType::AllIn, 50);
    act(&mut round, 3, ActType::Fold, 0);

    // 2 в олл-ине, 3 сфолдил – очередь: 4, затем 1.
    assert_eq!(round.betting.to_act, vec![4, 1]);
    assert_eq!(round.current_actor(), Some(4));
}

//
// Фолд до одного игрока
//

#[test]
fn folding_down_to_one_player_ends_the_round() {
    let mut round = make_round(&[100, 100, 100], 10);

    act(&mut round, 1, ActType::Raise, 20);
    act(&mut round, 2, ActType::Fold, 0);
    let status = act(&mut round, 3, ActType::Fold, 0);

    let expected = RoundOutcome::Uncontested {
        winner: 1,
        amount: Chips(20),
    };
    assert_eq!(status, RoundStatus::Finished(expected.clone()));
    assert_eq!(round.phase, Phase::Showdown);
    assert_eq!(round.outcome, Some(expected));
    assert!(round.is_closed());
    assert_eq!(round.current_actor(), None);
}

//
// Олл-ин докручивает раунд
//

#[test]
fn all_in_call_runs_the_round_out_to_showdown() {
    let mut round = make_round(&[100, 50], 10);

    act(&mut round, 1, ActType::Raise, 60);
    assert_eq!(
        possible_acts(&round, 2).unwrap(),
        vec![ActType::Fold, ActType::AllIn]
    );

    let status = act(&mut round, 2, ActType::AllIn, 50);

    assert_eq!(
        status,
        RoundStatus::Finished(RoundOutcome::Showdown {
            contenders: vec![1, 2],
            pot: Chips(110),
        })
    );
    assert_eq!(round.phase, Phase::Showdown);

    let phases: Vec<Phase> = round
        .history
        .events
        .iter()
        .filter_map(|e| match e.kind {
            RoundEventKind::PhaseChanged { phase } => Some(phase),
            _ => None,
        })
        .collect();
    assert_eq!(
        phases,
        vec![Phase::Flop, Phase::Turn, Phase::River, Phase::Showdown]
    );
}

#[test]
fn all_in_above_highest_bet_reopens_action() {
    let mut round = make_round(&[100, 150], 10);

    act(&mut round, 1, ActType::Raise, 20);
    act(&mut round, 2, ActType::AllIn, 150);

    assert_eq!(round.highest_bet(), Chips(150));
    assert_eq!(round.current_actor(), Some(1));
    assert_eq!(
        possible_acts(&round, 1).unwrap(),
        vec![ActType::Fold, ActType::AllIn]
    );
}

#[test]
fn call_with_exact_stack_marks_player_all_in() {
    let mut round = make_round(&[100, 40, 100], 10);

    act(&mut round, 1, ActType::Raise, 40);
    act(&mut round, 2, ActType::Call, 0);

    let p2 = round.player(2).unwrap();
    assert!(p2.all_in);
    assert_eq!(p2.stack, Chips::ZERO);
    assert_eq!(round.current_actor(), Some(3));
}

//
// История
//

#[test]
fn history_records_every_accepted_act_in_order() {
    let mut round = make_round(&[100, 100], 10);

    act(&mut round, 1, ActType::Raise, 20);
    act(&mut round, 2, ActType::Call, 0);
    act(&mut round, 1, ActType::Check, 0);

    let acts: Vec<(PlayerId, ActType, Phase, Chips)> = round
        .acts()
        .map(|a| (a.player_id, a.act_type, a.phase, a.bet))
        .collect();

    assert_eq!(
        acts,
        vec![
            (1, ActType::Raise, Phase::PreFlop, Chips(20)),
            (2, ActType::Call, Phase::PreFlop, Chips(20)),
            (1, ActType::Check, Phase::Flop, Chips::ZERO),
        ]
    );

    // Индексы событий идут подряд.
    for (i, e) in round.history.events.iter().enumerate() {
        assert_eq!(e.index, i);
    }
}
