use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            total: Chips::ZERO,
        }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }
}
