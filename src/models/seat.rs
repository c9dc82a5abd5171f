use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
    /// Выбрано пользователем на клиенте, генератор это состояние не выдает
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Standard,
    Wheelchair,
}

/// Ячейка схемы зала. Не хранится, каждый раз строится из Schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String, // "A3"
    pub row_label: String,
    pub col_label: String,
    pub status: SeatStatus,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
}

impl Seat {
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

/// Результат генерации схемы вместе с кодами проданных мест,
/// которые не попали ни в одну ячейку.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    pub seats: Vec<Seat>,
    pub unmatched: Vec<String>,
}
