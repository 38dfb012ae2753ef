//! HTTP-маршруты раунда в виде данных: путь → команда/запрос.
//!
//! Сам HTTP-сервер живёт снаружи; здесь только разбор пути и тела.

use crate::domain::{PlayerId, RoundId};

use super::commands::{Command, SaveActCommand};
use super::dto::ActDto;
use super::errors::ApiError;
use super::queries::Query;

/// Известные маршруты.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `GET /rounds/{roundId}/players/{playerId}/possible-acts`
    PossibleActs {
        round_id: RoundId,
        player_id: PlayerId,
    },
    /// `POST /rounds/{roundId}/players/{playerId}/acts`
    SaveAct {
        round_id: RoundId,
        player_id: PlayerId,
    },
}

/// Что получилось из маршрута + тела.
#[derive(Clone, Debug)]
pub enum ApiRequest {
    Command(Command),
    Query(Query),
}

impl Route {
    /// Разобрать метод и путь. Префикс `/api` необязателен.
    pub fn parse(method: &str, path: &str) -> Option<Route> {
        let path = path.strip_prefix("/api").unwrap_or(path);
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        let (round_id, player_id, tail) = match segments.as_slice() {
            ["rounds", round, "players", player, tail] => {
                (round.parse().ok()?, player.parse().ok()?, *tail)
            }
            _ => return None,
        };

        match (method, tail) {
            ("GET", "possible-acts") => Some(Route::PossibleActs {
                round_id,
                player_id,
            }),
            ("POST", "acts") => Some(Route::SaveAct {
                round_id,
                player_id,
            }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::PossibleActs {
                round_id,
                player_id,
            } => format!("/api/rounds/{round_id}/players/{player_id}/possible-acts"),
            Route::SaveAct {
                round_id,
                player_id,
            } => format!("/api/rounds/{round_id}/players/{player_id}/acts"),
        }
    }

    /// Статус успешного ответа: 200 для чтения, 201 для принятого действия.
    pub fn success_status(&self) -> u16 {
        match self {
            Route::PossibleActs { .. } => 200,
            Route::SaveAct { .. } => 201,
        }
    }

    /// Собрать команду/запрос. Для POST нужно JSON-тело.
    pub fn into_request(self, body: Option<&str>) -> Result<ApiRequest, ApiError> {
        match self {
            Route::PossibleActs {
                round_id,
                player_id,
            } => Ok(ApiRequest::Query(Query::PossibleActs {
                round_id,
                player_id,
            })),
            Route::SaveAct {
                round_id,
                player_id,
            } => {
                let body = body.ok_or_else(|| ApiError::BadRequest("нет тела запроса".into()))?;
                let act = ActDto::from_json(body)?;
                Ok(ApiRequest::Command(Command::SaveAct(SaveActCommand {
                    round_id,
                    player_id,
                    act,
                })))
            }
        }
    }
}
