// src/engine/round_engine.rs

use log::{debug, warn};

use crate::domain::act::{ActRequest, ActType};
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::round::{Round, RoundSetup};
use crate::domain::{PlayerId, RoundId};
use crate::engine::errors::RoundError;
use crate::engine::locks::{acquire, RoundLocks};
use crate::engine::round_state::{apply_act, start_round, RoundStatus};
use crate::engine::validation::possible_acts;
use crate::infra::persistence::RoundRepository;

/// Результат принятого действия: раунд после коммита + его статус.
#[derive(Clone, Debug)]
pub struct AppliedAct {
    pub round: Round,
    pub status: RoundStatus,
}

/// Движок раундов поверх хранилища:
/// - чтение возможных действий без блокировок;
/// - запись действий строго по одному на раунд;
/// - каждое действие либо целиком сохраняется, либо не меняет ничего.
pub struct RoundEngine<S: RoundRepository> {
    storage: S,
    locks: RoundLocks,
}

impl<S: RoundRepository> RoundEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            locks: RoundLocks::new(),
        }
    }

    /// Доступ к хранилищу (read-only).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Создать раунд. Раунд с уже занятым id не перезаписывается.
    pub fn create_round(&self, setup: RoundSetup) -> Result<Round, RoundError> {
        let lock = self.locks.lock_for(setup.round_id);
        let _guard = acquire(&lock);

        if let Some(existing) = self.storage.load_round(setup.round_id) {
            // Мьютекс открытого раунда оставляем: он нужен его действиям.
            if existing.is_closed() {
                self.locks.forget(setup.round_id);
            }
            return Err(RoundError::InvalidSetup("раунд с таким id уже существует"));
        }

        let round_id = setup.round_id;
        let round = match start_round(setup) {
            Ok(round) => round,
            Err(e) => {
                self.locks.forget(round_id);
                return Err(e);
            }
        };
        self.storage.save_round(&round);
        Ok(round)
    }

    /// Сколько раундов сейчас держат свой мьютекс.
    pub fn active_locks(&self) -> usize {
        self.locks.len()
    }

    /// Последнее сохранённое состояние раунда.
    pub fn round(&self, round_id: RoundId) -> Result<Round, RoundError> {
        self.storage
            .load_round(round_id)
            .ok_or(RoundError::RoundNotFound(round_id))
    }

    /// Возможные действия игрока. Мьютекс не берём: если параллельно
    /// коммитится действие, ответ может оказаться устаревшим.
    pub fn possible_acts(
        &self,
        round_id: RoundId,
        player_id: PlayerId,
    ) -> Result<Vec<ActType>, RoundError> {
        let round = self.round(round_id)?;
        possible_acts(&round, player_id)
    }

    /// Принять действие игрока: проверка → применение → сохранение.
    pub fn save_act(
        &self,
        round_id: RoundId,
        player_id: PlayerId,
        act_type: ActType,
        phase: Phase,
        bet: Chips,
    ) -> Result<AppliedAct, RoundError> {
        let lock = self.locks.lock_for(round_id);
        let _guard = acquire(&lock);

        // Работаем с копией: при ошибке в хранилище ничего не попадёт.
        let mut round = self.round(round_id)?;
        let request = ActRequest::new(act_type, phase, bet);

        let status = match apply_act(&mut round, player_id, request) {
            Ok(status) => status,
            Err(e) => {
                warn!(
                    "round {}: rejected {} from player {}: {}",
                    round_id, act_type, player_id, e
                );
                return Err(e);
            }
        };

        self.storage.save_round(&round);
        debug!("round {}: committed act #{}", round_id, round.history.len());

        if let RoundStatus::Finished(_) = status {
            self.locks.forget(round_id);
        }

        Ok(AppliedAct { round, status })
    }
}
