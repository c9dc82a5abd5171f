use reqwest::header::AUTHORIZATION;
use tracing::{debug, error};

use super::{bearer_for, check_status, TheaterClient};
use crate::{auth::AuthContext, error::ClientError, models::MediaRef};

const HISTORY_PATH: &str = "/api/history";

impl TheaterClient {
    /// Записать просмотр в историю. Для анонимного пользователя ничего не делает,
    /// ошибки только логируются.
    pub async fn add_to_history(&self, auth: &AuthContext, item: &MediaRef) {
        if !auth.is_authenticated() {
            debug!("Skipping history for tmdb_id={}: not logged in", item.tmdb_id);
            return;
        }

        if let Err(e) = self.post_history(auth, item).await {
            error!("Failed to add tmdb_id={} to history: {}", item.tmdb_id, e);
        }
    }

    // POST /api/history {"tmdbId": 550, "mediaType": "movie"}
    async fn post_history(&self, auth: &AuthContext, item: &MediaRef) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(self.url(HISTORY_PATH))
            .header(AUTHORIZATION, bearer_for(auth)?)
            .json(item)
            .send()
            .await?;

        check_status(resp).await?;
        Ok(())
    }
}
