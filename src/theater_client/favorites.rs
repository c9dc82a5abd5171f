use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::{bearer_for, check_status, TheaterClient};
use crate::{auth::AuthContext, error::ClientError, models::MediaRef};

const FAVORITES_PATH: &str = "/api/favorites";
const FAVORITES_CHECK_PATH: &str = "/api/favorites/check";

impl TheaterClient {
    /// В избранном ли элемент. Без авторизации и при любой ошибке false.
    pub async fn check_favorite(&self, auth: &AuthContext, item: &MediaRef) -> bool {
        if !auth.is_authenticated() {
            return false;
        }

        match self.fetch_favorite_status(auth, item).await {
            Ok(is_favorite) => is_favorite,
            Err(e) => {
                error!("Failed to check favorite status for tmdb_id={}: {}", item.tmdb_id, e);
                false
            }
        }
    }

    // GET /api/favorites/check?tmdbId=550&mediaType=movie
    async fn fetch_favorite_status(&self, auth: &AuthContext, item: &MediaRef) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(self.url(FAVORITES_CHECK_PATH))
            .header(AUTHORIZATION, bearer_for(auth)?)
            .query(&[
                ("tmdbId", item.tmdb_id.to_string()),
                ("mediaType", item.media_type.as_str().to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            debug!("Favorite check returned {}", resp.status());
            return Ok(false);
        }

        let body: Value = serde_json::from_str(&resp.text().await?)?;
        Ok(body.get("isFavorite").and_then(Value::as_bool).unwrap_or(false))
    }

    /// POST /api/favorites добавляет, DELETE /api/favorites убирает
    pub async fn set_favorite(
        &self,
        auth: &AuthContext,
        item: &MediaRef,
        favorite: bool,
    ) -> Result<(), ClientError> {
        let bearer = bearer_for(auth)?;
        let url = self.url(FAVORITES_PATH);
        let req = if favorite {
            self.http.post(url)
        } else {
            self.http.delete(url)
        };

        let resp = req.header(AUTHORIZATION, bearer).json(item).send().await?;
        check_status(resp).await?;

        info!(
            tmdb_id = item.tmdb_id,
            media_type = item.media_type.as_str(),
            "Favorite set to {}",
            favorite
        );
        Ok(())
    }
}

/// Состояние кнопки "в избранное" для одного элемента каталога.
///
/// Пересчет при смене авторизации делает вызывающий код через `refresh`.
/// `toggle` меняет состояние только после успешного ответа, поэтому
/// при ошибке остается прежнее значение.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteState {
    item: MediaRef,
    is_favorite: bool,
}

impl FavoriteState {
    pub fn new(item: MediaRef) -> Self {
        Self {
            item,
            is_favorite: false,
        }
    }

    pub fn item(&self) -> &MediaRef {
        &self.item
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Перечитать статус; для анонимного пользователя всегда false
    pub async fn refresh(&mut self, client: &TheaterClient, auth: &AuthContext) -> bool {
        self.is_favorite = client.check_favorite(auth, &self.item).await;
        self.is_favorite
    }

    /// Переключить статус. Возвращает новое значение.
    pub async fn toggle(&mut self, client: &TheaterClient, auth: &AuthContext) -> Result<bool, ClientError> {
        let next = !self.is_favorite;

        match client.set_favorite(auth, &self.item, next).await {
            Ok(()) => {
                self.is_favorite = next;
                Ok(next)
            }
            Err(e) => {
                warn!("Favorite toggle for tmdb_id={} rolled back: {}", self.item.tmdb_id, e);
                Err(e)
            }
        }
    }
}
