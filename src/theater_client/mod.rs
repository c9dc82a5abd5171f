//! theater_client
//!
//! HTTP клиент к API кинотеатра: список сеансов и создание брони здесь,
//! избранное и история просмотров в подмодулях.
//!
//! Клиент не делает повторов и не отменяет запросы. Единственная политика
//! на его стороне - таймаут из `ApiConfig`, все остальное решает вызывающий код.

use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Response,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::{
    auth::AuthContext,
    config::ApiConfig,
    error::ClientError,
    models::{BookingConfirmation, BookingRequest, Schedule},
};

pub mod favorites;
pub mod history;

pub use favorites::FavoriteState;

const SCHEDULES_PATH: &str = "/api/theater/schedules";
const BOOKINGS_PATH: &str = "/api/bookings";

/// Клиент для API кинотеатра
#[derive(Clone)]
pub struct TheaterClient {
    http: reqwest::Client,
    base_url: String,
}

impl TheaterClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/theater/schedules?tmdbId=550&date=2024-01-01
    pub async fn get_schedules(&self, tmdb_id: i64, date: &str) -> Result<Vec<Schedule>, ClientError> {
        debug!("Fetching schedules for tmdb_id={} date={}", tmdb_id, date);

        let resp = self
            .http
            .get(self.url(SCHEDULES_PATH))
            .query(&[("tmdbId", tmdb_id.to_string()), ("date", date.to_string())])
            .send()
            .await?;

        let body = check_status(resp).await?.text().await?;
        let schedules: Vec<Schedule> = serde_json::from_str(&body)?;

        info!("Loaded {} schedules for tmdb_id={} on {}", schedules.len(), tmdb_id, date);
        Ok(schedules)
    }

    /// То же, что `get_schedules`, но любая ошибка превращается в пустой список
    pub async fn get_schedules_or_empty(&self, tmdb_id: i64, date: &str) -> Vec<Schedule> {
        match self.get_schedules(tmdb_id, date).await {
            Ok(schedules) => schedules,
            Err(e) => {
                error!("Fetch schedules error: {}", e);
                vec![]
            }
        }
    }

    /// POST /api/bookings с токеном из контекста авторизации
    pub async fn create_booking(
        &self,
        auth: &AuthContext,
        payload: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError> {
        let bearer = match bearer_for(auth) {
            Ok(header) => header,
            Err(e) => {
                warn!("Booking rejected: {}", e);
                return Err(e);
            }
        };

        payload.validate()?;

        let resp = self
            .http
            .post(self.url(BOOKINGS_PATH))
            .header(AUTHORIZATION, bearer)
            .json(payload)
            .send()
            .await?;

        // Бронь уже создана: тело ответа разбираем без права на ошибку
        let body = check_status(resp).await?.text().await.unwrap_or_else(|e| {
            warn!("Failed to read booking response body: {}", e);
            String::new()
        });
        let confirmation = BookingConfirmation::from_body(&body);

        info!(
            schedule_id = payload.schedule_id,
            seats = payload.seats.len(),
            "Booking created: {:?}",
            confirmation.booking_id
        );
        Ok(confirmation)
    }
}

// Заголовок Authorization или Unauthorized, если пользователь не вошел
fn bearer_for(auth: &AuthContext) -> Result<HeaderValue, ClientError> {
    match auth.bearer() {
        Some(header) => header.map_err(|_| ClientError::InvalidToken),
        None => Err(ClientError::Unauthorized),
    }
}

// Не-2xx ответ превращаем в ClientError::Status, вытаскивая errorCode и message из тела
async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body: Value = resp.json().await.unwrap_or(Value::Null);
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);

    let err = ClientError::Status {
        status,
        error_code: field("errorCode"),
        message: field("message"),
    };
    error!("API error: {}", err);
    Err(err)
}
