//! format.rs
//!
//! Форматирование значений для отображения и тексты ошибок для пользователя.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::ClientError;

/// 1000000 -> "$1,000,000". Пусто для None и нуля.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a != 0.0 && a.is_finite() => a,
        _ => return String::new(),
    };

    // f64::round округляет половину от нуля, как Intl.NumberFormat
    let digits = (amount.abs().round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// 90 -> "1h 30m", 45 -> "45m"
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => String::new(),
        Some(total) => {
            let (h, m) = (total / 60, total % 60);
            if h > 0 {
                format!("{}h {}m", h, m)
            } else {
                format!("{}m", m)
            }
        }
    }
}

/// "2023-12-25" -> "2023"
pub fn get_year(date: Option<&str>) -> &str {
    date.and_then(|d| d.split('-').next()).unwrap_or("")
}

/// 7.823 -> "7.8"
pub fn format_rating(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format!("{:.1}", (v * 10.0).round() / 10.0),
        _ => "0.0".to_string(),
    }
}

/// CSS класс цвета по рейтингу в процентах
pub fn rating_color(rating: f64) -> &'static str {
    if rating >= 70.0 {
        "text-primary"
    } else if rating >= 40.0 {
        "text-warning"
    } else {
        "text-error"
    }
}

/// Убирает повторы по ключу, оставляя первое вхождение
pub fn unique_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

pub const DEFAULT_ERROR_MESSAGE: &str = "發生未知錯誤";
pub const FETCH_ERROR_MESSAGE: &str = "網路連線失敗，請檢查您的網路";

pub fn message_for_status(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("請求無效，請檢查您的輸入"),
        401 => Some("您尚未登入或憑證已過期，請重新登入"),
        404 => Some("很抱歉，找不到此頁面"),
        500 => Some("伺服器發生內部錯誤，請稍後再試"),
        503 => Some("服務目前無法使用，請稍後再試"),
        _ => None,
    }
}

/// Тексты для кодов ошибок бэкенда (errorCode)
pub fn message_for_code(code: &str) -> Option<&'static str> {
    match code {
        "VALIDATION_FAILED" => Some("您輸入的資料不完整或格式有誤"),
        "INVALID_PARAMETER" => Some("請求的參數不正確"),
        "DOWNSTREAM_API_FAILED" => Some("搜尋服務暫時無法使用，請稍後再試"),
        "INTERNAL_SERVER_ERROR" => Some("系統發生內部錯誤，請聯繫客服"),
        "FETCH_ERROR" => Some(FETCH_ERROR_MESSAGE),
        _ => None,
    }
}

/// Сообщение для пользователя: сначала errorCode, потом HTTP статус,
/// потом сетевая ошибка, иначе общее сообщение.
pub fn error_message(err: &ClientError) -> &'static str {
    if let Some(msg) = err.error_code().and_then(message_for_code) {
        return msg;
    }
    if let Some(msg) = err.status().and_then(|s| message_for_status(s.as_u16())) {
        return msg;
    }
    if err.is_fetch_error() {
        return FETCH_ERROR_MESSAGE;
    }
    DEFAULT_ERROR_MESSAGE
}
