use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::services::schedule::DEFAULT_HALL_TYPE;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub booking: BookingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки API кинотеатра
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub auth_token: Option<String>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

// Параметры сценария бронирования
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub default_hall_type: String,
    pub tmdb_id: i64,
    pub show_date: Option<String>,
    pub cinema_name: String,
    pub book_seats: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 10,
            auth_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "theater_booking=debug,reqwest=info".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string()),
                timeout_seconds: env::var("API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("API_TIMEOUT_SECONDS must be a valid number"),
                auth_token: non_empty_var("AUTH_TOKEN"),
            },
            booking: BookingConfig {
                default_hall_type: env::var("DEFAULT_HALL_TYPE")
                    .unwrap_or_else(|_| DEFAULT_HALL_TYPE.to_string()),
                tmdb_id: env::var("TMDB_ID")
                    .unwrap_or_else(|_| "550".to_string())
                    .parse()
                    .expect("TMDB_ID must be a valid number"),
                show_date: non_empty_var("SHOW_DATE"),
                cinema_name: env::var("CINEMA_NAME").unwrap_or_default(),
                // BOOK_SEATS=A1,A2 - какие места бронировать после вывода схемы
                book_seats: env::var("BOOK_SEATS")
                    .map(|v| parse_seat_list(&v))
                    .unwrap_or_default(),
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_seat_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
