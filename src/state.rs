use linera_sdk::views::{linera_views, MapView, RootView, ViewError, ViewStorageContext};

use crate::domain::round::Round;
use crate::domain::RoundId;

/// Глобальное состояние приложения раундов на Linera.
///
/// Раунд хранится целиком одной записью в MapView: действие либо
/// записывает весь новый раунд, либо не пишет ничего.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct RoundsState {
    /// Все раунды.
    ///
    /// Ключ: RoundId,
    /// Значение: доменная структура Round (Serialize + Deserialize).
    #[view(map)]
    pub rounds: MapView<RoundId, Round>,
}

impl RoundsState {
    /// Загрузить раунд.
    pub async fn round(&self, round_id: RoundId) -> Result<Option<Round>, ViewError> {
        self.rounds.get(&round_id).await
    }
}
