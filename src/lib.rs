pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod theater_client;

use crate::auth::AuthContext;
use crate::services::{Clock, FixedClock, LocalClock};

// Общее состояние для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: theater_client::TheaterClient,
    pub auth: AuthContext,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, error::ClientError> {
        let client = theater_client::TheaterClient::new(&config.api)?;
        let auth = AuthContext::from_token(config.api.auth_token.clone());

        Ok(Self { config, client, auth })
    }

    /// Часы для выбора дат: SHOW_DATE из конфигурации или локальная дата
    pub fn clock(&self) -> Box<dyn Clock> {
        let fixed = match self.config.booking.show_date.as_deref() {
            Some(d) => match chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!("Ignoring SHOW_DATE={}: {}", d, e);
                    None
                }
            },
            None => None,
        };

        match fixed {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(LocalClock),
        }
    }
}
