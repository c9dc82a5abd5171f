use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Тело запроса POST /api/bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(range(min = 1))]
    pub schedule_id: i64,
    #[validate(range(min = 1))]
    pub tmdb_id: i64,
    pub movie_title: String,
    pub poster_url: String,
    pub cinema_name: String,
    pub show_date: String,
    pub show_time: String,
    #[validate(length(min = 1))]
    pub seats: Vec<String>, // ["A1", "A2"]
    #[validate(range(min = 0.0))]
    pub total_price: f64,
}

/// Данные для отображения, которые клиент кладет в бронь как есть
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDisplay {
    pub poster_url: String,
    pub cinema_name: String,
}

/// Ответ бэкенда на создание брони. Формат ответа не зафиксирован:
/// id может прийти числом или строкой, под ключом bookingId или id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: Option<String>,
    pub message: Option<String>,
    pub raw: Value,
}

impl BookingConfirmation {
    /// Разбирает тело успешного ответа. Никогда не падает: бронь уже создана.
    pub fn from_value(raw: Value) -> Self {
        let booking_id = ["bookingId", "id"]
            .iter()
            .find_map(|key| raw.get(*key).and_then(scalar_to_string));
        let message = raw.get("message").and_then(scalar_to_string);

        Self { booking_id, message, raw }
    }

    /// Тело не JSON: сохраняем как есть строкой
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Value>(body) {
            Ok(raw) => Self::from_value(raw),
            Err(_) => Self::from_value(Value::String(body.to_string())),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids() {
        let c = BookingConfirmation::from_value(json!({ "bookingId": 77, "message": "ok" }));
        assert_eq!(c.booking_id.as_deref(), Some("77"));
        assert_eq!(c.message.as_deref(), Some("ok"));

        let c = BookingConfirmation::from_value(json!({ "id": "bk-9f2c", "status": "CONFIRMED" }));
        assert_eq!(c.booking_id.as_deref(), Some("bk-9f2c"));
        assert_eq!(c.raw["status"], "CONFIRMED");
    }

    #[test]
    fn booking_id_preferred_over_id() {
        let c = BookingConfirmation::from_value(json!({ "id": 1, "bookingId": 2 }));
        assert_eq!(c.booking_id.as_deref(), Some("2"));
    }

    #[test]
    fn odd_bodies_do_not_fail() {
        let c = BookingConfirmation::from_value(json!({ "id": { "nested": true }, "message": 5 }));
        assert_eq!(c.booking_id, None);
        assert_eq!(c.message.as_deref(), Some("5"));

        let c = BookingConfirmation::from_body("Created");
        assert_eq!(c.booking_id, None);
        assert_eq!(c.raw, Value::String("Created".to_string()));

        assert_eq!(BookingConfirmation::from_body("  "), BookingConfirmation::default());
        assert_eq!(BookingConfirmation::from_body("[1,2]").raw, json!([1, 2]));
    }
}
