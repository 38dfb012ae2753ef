// tests/api_test.rs

use poker_round_engine::{
    api::{
        auth::{Caller, Role},
        commands::{Command, CreateRoundCommand, SaveActCommand},
        dto::{ActDto, CommandResponse, SeatedPlayerDto},
        errors::ApiError,
        handler::{handle_command, handle_query, round_view},
        queries::{Query, QueryResponse},
        routes::{ApiRequest, Route},
    },
    domain::{act::ActType, chips::Chips, phase::Phase, round::RoundOutcome, PlayerId, RoundId},
    engine::{RoundEngine, RoundErrorKind},
    infra::persistence::InMemoryRoundRepository,
};

type Engine = RoundEngine<InMemoryRoundRepository>;

/// Утилита: движок с одним раундом (игроки 1 и 2 по 100 фишек, шаг рейза 10).
fn engine_with_round(round_id: RoundId) -> Engine {
    let engine = RoundEngine::new(InMemoryRoundRepository::new());
    let cmd = Command::CreateRound(CreateRoundCommand {
        round_id,
        min_raise: Chips(10),
        players: vec![
            SeatedPlayerDto {
                player_id: 1,
                stack: Chips(100),
            },
            SeatedPlayerDto {
                player_id: 2,
                stack: Chips(100),
            },
        ],
    });
    handle_command(&engine, &Caller::admin(), cmd).expect("create round failed");
    engine
}

/// Утилита: прогнать HTTP-запрос так, как это сделал бы сервер.
/// Возвращает статус и ответ в виде JSON.
fn call(
    engine: &Engine,
    caller: &Caller,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (u16, serde_json::Value) {
    let route = Route::parse(method, path).expect("unknown route");

    let result = route.into_request(body).and_then(|req| match req {
        ApiRequest::Query(q) => {
            handle_query(engine, caller, q).map(|r| serde_json::to_value(r).unwrap())
        }
        ApiRequest::Command(c) => {
            handle_command(engine, caller, c).map(|r| serde_json::to_value(r).unwrap())
        }
    });

    match result {
        Ok(value) => (route.success_status(), value),
        Err(e) => (e.status_code(), serde_json::to_value(&e).unwrap()),
    }
}

fn save_act(player_id: PlayerId, act_type: ActType, bet: u64) -> Command {
    Command::SaveAct(SaveActCommand {
        round_id: 1,
        player_id,
        act: ActDto {
            act_type,
            phase: Phase::PreFlop,
            bet: Chips(bet),
        },
    })
}

//
// ---------- маршруты и JSON ----------
//

#[test]
fn possible_acts_route_returns_act_tokens() {
    let engine = engine_with_round(1);

    let (status, body) = call(
        &engine,
        &Caller::user(1),
        "GET",
        "/api/rounds/1/players/1/possible-acts",
        None,
    );

    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({ "PossibleActs": ["FOLD", "CHECK", "RAISE", "ALL_IN"] })
    );
}

#[test]
fn posting_an_act_returns_201_and_echoes_the_act() {
    let engine = engine_with_round(1);

    let (status, _) = call(
        &engine,
        &Caller::user(1),
        "POST",
        "/api/rounds/1/players/1/acts",
        Some(r#"{"type":"RAISE","phase":"PRE_FLOP","bet":20}"#),
    );
    assert_eq!(status, 201);

    // bet для CALL можно не передавать.
    let cmd = Route::parse("POST", "/rounds/1/players/2/acts")
        .unwrap()
        .into_request(Some(r#"{"type":"CALL","phase":"PRE_FLOP"}"#))
        .unwrap();
    let cmd = match cmd {
        ApiRequest::Command(c) => c,
        other => panic!("ожидали команду, получили {other:?}"),
    };

    match handle_command(&engine, &Caller::user(2), cmd).unwrap() {
        CommandResponse::ActAccepted { act, round } => {
            assert_eq!(act.act_type, ActType::Call);
            assert_eq!(act.phase, Phase::PreFlop);
            assert_eq!(act.bet, Chips::ZERO);

            assert_eq!(round.pot, Chips(40));
            assert_eq!(round.phase, Phase::Flop);
            assert_eq!(round.acts.len(), 2);
            // В истории – реально внесённые фишки.
            assert_eq!(round.acts[1].bet, Chips(20));
        }
        other => panic!("ожидали ActAccepted, получили {other:?}"),
    }
}

#[test]
fn act_dto_json_uses_type_field_and_screaming_tokens() {
    let dto = ActDto {
        act_type: ActType::AllIn,
        phase: Phase::River,
        bet: Chips(75),
    };
    let json = dto.to_json().unwrap();
    assert_eq!(json, r#"{"type":"ALL_IN","phase":"RIVER","bet":75}"#);
    assert_eq!(ActDto::from_json(&json).unwrap(), dto);
}

#[test]
fn malformed_body_is_bad_request() {
    let engine = engine_with_round(1);

    let (status, _) = call(
        &engine,
        &Caller::user(1),
        "POST",
        "/api/rounds/1/players/1/acts",
        Some(r#"{"type":"SHOVE","phase":"PRE_FLOP"}"#),
    );
    assert_eq!(status, 400);

    // Ничего не записалось.
    let round = engine.round(1).unwrap();
    assert_eq!(round.acts().count(), 0);
}

//
// ---------- ошибки движка → HTTP-статусы ----------
//

#[test]
fn engine_errors_map_to_http_statuses() {
    let engine = engine_with_round(1);
    let p1 = Caller::user(1);
    let p2 = Caller::user(2);

    // 404: нет раунда.
    let (status, _) = call(&engine, &p1, "GET", "/rounds/77/players/1/possible-acts", None);
    assert_eq!(status, 404);

    // 409: не его ход.
    let (status, body) = call(
        &engine,
        &p2,
        "POST",
        "/rounds/1/players/2/acts",
        Some(r#"{"type":"CHECK","phase":"PRE_FLOP"}"#),
    );
    assert_eq!(status, 409);
    assert_eq!(body["Round"]["kind"], "NOT_PLAYERS_TURN");

    // 422: сумма рейза меньше минимума.
    let (status, body) = call(
        &engine,
        &p1,
        "POST",
        "/rounds/1/players/1/acts",
        Some(r#"{"type":"RAISE","phase":"PRE_FLOP","bet":5}"#),
    );
    assert_eq!(status, 422);
    assert_eq!(body["Round"]["kind"], "INVALID_AMOUNT");

    // 422: фаза не та.
    let (status, _) = call(
        &engine,
        &p1,
        "POST",
        "/rounds/1/players/1/acts",
        Some(r#"{"type":"CHECK","phase":"TURN"}"#),
    );
    assert_eq!(status, 422);
}

#[test]
fn closed_round_is_conflict() {
    let engine = engine_with_round(1);
    handle_command(&engine, &Caller::user(1), save_act(1, ActType::Fold, 0)).unwrap();

    let err = handle_command(&engine, &Caller::user(2), save_act(2, ActType::Check, 0))
        .unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert!(matches!(
        err,
        ApiError::Round {
            kind: RoundErrorKind::RoundClosed,
            ..
        }
    ));

    let round = match handle_query(&engine, &Caller::admin(), Query::GetRound { round_id: 1 }) {
        Ok(QueryResponse::Round(r)) => r,
        other => panic!("ожидали Round, получили {other:?}"),
    };
    assert_eq!(
        round.outcome,
        Some(RoundOutcome::Uncontested {
            winner: 2,
            amount: Chips::ZERO,
        })
    );
    assert_eq!(round.current_actor, None);
}

//
// ---------- права ----------
//

#[test]
fn player_cannot_act_for_someone_else() {
    let engine = engine_with_round(1);

    let err = handle_command(&engine, &Caller::user(2), save_act(1, ActType::Check, 0))
        .unwrap_err();
    assert_eq!(err.status_code(), 403);

    // Админ без player_id тоже не может ходить за игрока.
    let err = handle_command(&engine, &Caller::admin(), save_act(1, ActType::Check, 0))
        .unwrap_err();
    assert_eq!(err.status_code(), 403);

    assert_eq!(engine.round(1).unwrap().acts().count(), 0);
}

#[test]
fn only_admin_creates_rounds_and_lists_them() {
    let engine = engine_with_round(1);

    let cmd = Command::CreateRound(CreateRoundCommand {
        round_id: 2,
        min_raise: Chips(10),
        players: vec![],
    });
    let err = handle_command(&engine, &Caller::user(1), cmd).unwrap_err();
    assert_eq!(err, ApiError::Forbidden(format!("нужна роль {:?}", Role::Admin)));

    let err = handle_query(&engine, &Caller::user(1), Query::ListRounds).unwrap_err();
    assert_eq!(err.status_code(), 403);

    assert_eq!(
        handle_query(&engine, &Caller::admin(), Query::ListRounds).unwrap(),
        QueryResponse::Rounds(vec![1])
    );
}

#[test]
fn admin_sees_anyones_possible_acts_but_users_only_their_own() {
    let engine = engine_with_round(1);

    let query = Query::PossibleActs {
        round_id: 1,
        player_id: 1,
    };

    let err = handle_query(&engine, &Caller::user(2), query.clone()).unwrap_err();
    assert_eq!(err.status_code(), 403);

    let resp = handle_query(&engine, &Caller::admin(), query).unwrap();
    assert_eq!(
        resp,
        QueryResponse::PossibleActs(vec![
            ActType::Fold,
            ActType::Check,
            ActType::Raise,
            ActType::AllIn
        ])
    );

    // Свой запрос, но сейчас не его ход → 409.
    let err = handle_query(
        &engine,
        &Caller::user(2),
        Query::PossibleActs {
            round_id: 1,
            player_id: 2,
        },
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 409);
}

#[test]
fn invalid_setup_is_bad_request() {
    let engine = RoundEngine::new(InMemoryRoundRepository::new());
    let cmd = Command::CreateRound(CreateRoundCommand {
        round_id: 1,
        min_raise: Chips(10),
        players: vec![SeatedPlayerDto {
            player_id: 1,
            stack: Chips(100),
        }],
    });

    let err = handle_command(&engine, &Caller::admin(), cmd).unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn round_view_shows_state_and_last_aggressor() {
    let engine = engine_with_round(1);

    let view = round_view(&engine, 1).unwrap();
    assert_eq!(view.current_actor, Some(1));
    assert_eq!(view.players.len(), 2);
    assert!(view.acts.is_empty());
    assert_eq!(view.last_aggressor, None);

    handle_command(&engine, &Caller::user(1), save_act(1, ActType::Raise, 20)).unwrap();
    let view = round_view(&engine, 1).unwrap();
    assert_eq!(view.last_aggressor, Some(1));
    assert_eq!(view.current_actor, Some(2));

    let err = round_view(&engine, 42).unwrap_err();
    assert_eq!(err.status_code(), 404);
}
