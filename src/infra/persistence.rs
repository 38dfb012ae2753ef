use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::round::Round;
use crate::domain::RoundId;

/// Порт хранилища раундов.
///
/// Запись – всегда целый раунд за одну операцию: частично обновлённый
/// раунд (банк уже вырос, а очередь ещё старая) снаружи не виден.
///
/// В Linera-режиме вместо этого используется `RoundsState` и Views,
/// а эта абстракция нужна для тестов и оффчейн-сервиса.
pub trait RoundRepository: Send + Sync {
    /// Загрузить раунд.
    fn load_round(&self, id: RoundId) -> Option<Round>;

    /// Сохранить раунд целиком.
    fn save_round(&self, round: &Round);

    /// Все известные id раундов (по возрастанию).
    fn round_ids(&self) -> Vec<RoundId>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryRoundRepository {
    rounds: RwLock<HashMap<RoundId, Round>>,
}

impl InMemoryRoundRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundRepository for InMemoryRoundRepository {
    fn load_round(&self, id: RoundId) -> Option<Round> {
        self.rounds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn save_round(&self, round: &Round) {
        self.rounds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(round.id, round.clone());
    }

    fn round_ids(&self) -> Vec<RoundId> {
        let mut ids: Vec<RoundId> = self
            .rounds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }
}
