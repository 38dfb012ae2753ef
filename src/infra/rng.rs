use crate::engine::RandomSource;

//
// NATIVE ВАРИАНТ (НЕ wasm32): тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn pick_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..len)
    }

    fn pick_between(&mut self, low: u64, high: u64) -> u64 {
        use rand::Rng;
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed → одинаковая последовательность действий ботов.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_u64(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.inner.gen_range(0..len)
    }

    fn pick_between(&mut self, low: u64, high: u64) -> u64 {
        use rand::Rng;
        self.inner.gen_range(low..=high)
    }
}

//
// WASM ВАРИАНТ (Linera контракт): rand / getrandom нет.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn pick_index(&mut self, _len: usize) -> usize {
        // Контракт детерминированный: всегда первый вариант.
        0
    }

    fn pick_between(&mut self, low: u64, _high: u64) -> u64 {
        low
    }
}
