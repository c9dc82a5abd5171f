//! media.rs
//!
//! Ссылка на элемент каталога TMDB и определение его типа.
//! Элементы каталога приходят разной формы (фильм, сериал, персона),
//! поэтому тип выводится по набору полей сырого JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Person => "person",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(MediaType::Movie),
            "tv" => Some(MediaType::Tv),
            "person" => Some(MediaType::Person),
            _ => None,
        }
    }
}

/// Тело запросов избранного и истории: {"tmdbId": 550, "mediaType": "movie"}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub tmdb_id: i64,
    pub media_type: MediaType,
}

impl MediaRef {
    pub fn new(tmdb_id: i64, media_type: MediaType) -> Self {
        Self { tmdb_id, media_type }
    }

    /// Из элемента каталога; None если у элемента нет числового id
    pub fn from_item(item: &Value) -> Option<Self> {
        let tmdb_id = item.get("id").and_then(Value::as_i64)?;
        Some(Self::new(tmdb_id, infer_media_type(item)))
    }
}

// Истинность значения в смысле JSON фронтенда: null, false, 0 и "" ложны
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Тип элемента: явный media_type, затем поля персоны,
/// затем поля сериала (first_air_date, name), иначе фильм.
pub fn infer_media_type(item: &Value) -> MediaType {
    if let Some(explicit) = item.get("media_type").and_then(Value::as_str).and_then(MediaType::parse) {
        return explicit;
    }

    // gender считается, даже если равен 0 или null
    if item.get("gender").is_some()
        || truthy(item.get("known_for_department"))
        || truthy(item.get("birthday"))
        || truthy(item.get("deathday"))
    {
        return MediaType::Person;
    }

    if truthy(item.get("first_air_date")) || truthy(item.get("name")) {
        return MediaType::Tv;
    }

    MediaType::Movie
}
