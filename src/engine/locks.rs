use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::RoundId;

/// Мьютекс на каждый раунд: действия в одном раунде применяются строго по одному,
/// разные раунды друг другу не мешают.
#[derive(Debug, Default)]
pub struct RoundLocks {
    locks: Mutex<HashMap<RoundId, Arc<Mutex<()>>>>,
}

impl RoundLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Получить (или создать) мьютекс раунда.
    pub fn lock_for(&self, round_id: RoundId) -> Arc<Mutex<()>> {
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(round_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Убрать мьютекс закрытого раунда. В закрытый раунд писать уже нечего,
    /// так что новый мьютекс (если кто-то придёт позже) ничего не нарушит.
    pub fn forget(&self, round_id: RoundId) {
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(&round_id);
    }

    /// Сколько раундов сейчас имеют свой мьютекс.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Захватить мьютекс раунда. Отравленный мьютекс не страшен:
/// состояние живёт в хранилище и пишется только после успешного действия.
pub fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}
