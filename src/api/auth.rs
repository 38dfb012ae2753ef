//! Кто вызывает API и что ему можно.
//!
//! Проверку токена делает внешний слой; сюда приходит уже готовый `Caller`.

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

use super::errors::ApiError;

/// Роль вызывающего.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

/// Вызывающий: игрок (если есть) и его роли.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Caller {
    pub player_id: Option<PlayerId>,
    pub roles: Vec<Role>,
}

impl Caller {
    pub fn user(player_id: PlayerId) -> Self {
        Self {
            player_id: Some(player_id),
            roles: vec![Role::User],
        }
    }

    pub fn admin() -> Self {
        Self {
            player_id: None,
            roles: vec![Role::Admin],
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!("нужна роль {role:?}")))
        }
    }

    /// Игрок может действовать только за себя.
    pub fn require_player(&self, player_id: PlayerId) -> Result<(), ApiError> {
        self.require_role(Role::User)?;
        if self.player_id == Some(player_id) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "нельзя действовать за игрока {player_id}"
            )))
        }
    }

    /// Смотреть чужие возможные действия может только админ.
    pub fn require_player_or_admin(&self, player_id: PlayerId) -> Result<(), ApiError> {
        if self.has_role(Role::Admin) {
            return Ok(());
        }
        self.require_player(player_id)
    }
}
