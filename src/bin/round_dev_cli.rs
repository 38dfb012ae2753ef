// src/bin/round_dev_cli.rs

use poker_round_engine::api::{
    handle_command, handle_query, ApiRequest, Caller, Command, CreateRoundCommand, QueryResponse,
    Route, SeatedPlayerDto,
};
use poker_round_engine::domain::chips::Chips;
use poker_round_engine::domain::{PlayerId, RoundId};
use poker_round_engine::engine::{RoundEngine, RoundStatus};
use poker_round_engine::infra::{
    map_round_to_dto, random_act, IdGenerator, InMemoryRoundRepository, SystemRng,
};

const PLAYERS: usize = 4;
const STARTING_STACK: u64 = 1_000;
const MIN_RAISE: u64 = 20;
const MAX_STEPS: usize = 200;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("round_dev_cli: стартуем dev-CLI раунда…");

    let id_gen = IdGenerator::new();
    let engine = RoundEngine::new(InMemoryRoundRepository::new());
    let admin = Caller::admin();

    // 1. Сценарий через HTTP-маршруты: A рейзит 20, B коллирует.
    let heads_up = create_round(&engine, &admin, &id_gen, 2);
    scripted_heads_up(&engine, heads_up.0, &heads_up.1);

    // 2. Случайные боты на столе побольше.
    let (round_id, players) = create_round(&engine, &admin, &id_gen, PLAYERS);
    let mut rng = SystemRng::default();

    for step in 0..MAX_STEPS {
        let round = match engine.round(round_id) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[DEV] раунд пропал: {e}");
                return;
            }
        };

        let actor = match round.current_actor() {
            Some(a) => a,
            None => break,
        };

        let request = match random_act(&round, actor, &mut rng) {
            Some(r) => r,
            None => break,
        };

        println!(
            "[DEV][step={step}] {} игрок {} → {} {}",
            round.phase, actor, request.act_type, request.bet
        );

        match engine.save_act(round_id, actor, request.act_type, request.phase, request.bet) {
            Ok(applied) => {
                if let RoundStatus::Finished(outcome) = applied.status {
                    println!("[DEV] раунд завершён: {outcome:?}");
                    break;
                }
            }
            Err(e) => {
                eprintln!("[DEV] бот сделал недопустимое действие: {e}");
                break;
            }
        }
    }

    if let Ok(round) = engine.round(round_id) {
        print_round(&map_round_to_dto(&round), &players);
    }

    println!("round_dev_cli: завершено.");
}

fn create_round(
    engine: &RoundEngine<InMemoryRoundRepository>,
    admin: &Caller,
    id_gen: &IdGenerator,
    count: usize,
) -> (RoundId, Vec<PlayerId>) {
    let round_id = id_gen.next_round_id();
    let players: Vec<PlayerId> = (0..count).map(|_| id_gen.next_player_id()).collect();

    let cmd = Command::CreateRound(CreateRoundCommand {
        round_id,
        min_raise: Chips(MIN_RAISE),
        players: players
            .iter()
            .map(|&player_id| SeatedPlayerDto {
                player_id,
                stack: Chips(STARTING_STACK),
            })
            .collect(),
    });

    if let Err(e) = handle_command(engine, admin, cmd) {
        eprintln!("[DEV] не удалось создать раунд {round_id}: {e:?}");
    }

    (round_id, players)
}

/// Прогон через маршруты так, как это делал бы HTTP-слой.
fn scripted_heads_up(engine: &RoundEngine<InMemoryRoundRepository>, round_id: RoundId, players: &[PlayerId]) {
    let (a, b) = (players[0], players[1]);
    let script = [
        (a, "GET", "possible-acts", None),
        (a, "POST", "acts", Some(r#"{"type":"RAISE","phase":"PRE_FLOP","bet":20}"#)),
        (b, "GET", "possible-acts", None),
        (b, "POST", "acts", Some(r#"{"type":"CALL","phase":"PRE_FLOP"}"#)),
    ];

    println!();
    println!("================ HEADS-UP round_id={round_id} ================");

    for (player_id, method, tail, body) in script {
        let path = format!("/api/rounds/{round_id}/players/{player_id}/{tail}");
        let caller = Caller::user(player_id);

        let route = match Route::parse(method, &path) {
            Some(r) => r,
            None => {
                eprintln!("[DEV] неизвестный маршрут {method} {path}");
                continue;
            }
        };

        let result = route.into_request(body).and_then(|req| match req {
            ApiRequest::Query(q) => handle_query(engine, &caller, q).map(|r| format!("{r:?}")),
            ApiRequest::Command(c) => handle_command(engine, &caller, c).map(|r| match r {
                poker_round_engine::api::CommandResponse::ActAccepted { act, round } => {
                    format!("{act:?} → pot={} phase={}", round.pot, round.phase)
                }
                other => format!("{other:?}"),
            }),
        });

        match result {
            Ok(text) => println!("{method} {path} → {} {text}", route.success_status()),
            Err(e) => println!("{method} {path} → {} {e:?}", e.status_code()),
        }
    }

    if let Ok(QueryResponse::Round(view)) = handle_query(
        engine,
        &Caller::admin(),
        poker_round_engine::api::Query::GetRound { round_id },
    ) {
        print_round(&view, players);
    }
}

fn print_round(view: &poker_round_engine::api::RoundViewDto, players: &[PlayerId]) {
    println!(
        "--- round {} | phase={} | pot={} | highest={} | actor={:?}",
        view.round_id, view.phase, view.pot, view.highest_bet, view.current_actor
    );
    for p in &view.players {
        println!(
            "    seat {} id={} stack={} committed={}{}{}",
            p.seat_index,
            p.player_id,
            p.stack,
            p.committed,
            if p.folded { " FOLDED" } else { "" },
            if p.all_in { " ALL-IN" } else { "" },
        );
    }
    println!(
        "    действий: {}, игроков за столом: {}",
        view.acts.len(),
        players.len()
    );
}
