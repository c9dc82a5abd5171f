//! seat_map.rs
//!
//! Построение схемы зала из описания сеанса.
//!
//! Схема всегда строится заново из `Schedule`: ряды сверху вниз, места
//! в ряду слева направо. Рендер сетки на клиенте полагается на этот порядок.

use std::collections::HashSet;
use tracing::warn;

use crate::models::{Schedule, Seat, SeatMap, SeatStatus, SeatType};

/// Максимум рядов в зале: метки до "ZZ"
pub const MAX_ROWS: i32 = 702;
/// Максимум мест в ряду
pub const MAX_COLS: i32 = 999;

/// Метка ряда в стиле колонок таблицы: 1 -> "A", 26 -> "Z", 27 -> "AA".
/// Для 0 возвращается пустая строка.
pub fn row_label(row: u32) -> String {
    let mut n = row;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Код места: метка ряда + номер места без ведущих нулей ("A12").
pub fn seat_code(row: u32, col: u32) -> String {
    format!("{}{}", row_label(row), col)
}

/// Строит схему и собирает проданные коды, которым не нашлось ячейки.
pub fn build_seat_map(schedule: &Schedule) -> SeatMap {
    // Зал больше лимита не строим вовсе, иначе упремся в память
    if schedule.row_count > MAX_ROWS || schedule.col_count > MAX_COLS {
        warn!(
            schedule_id = schedule.schedule_id,
            rows = schedule.row_count,
            cols = schedule.col_count,
            "Hall grid exceeds {}x{}, returning empty seat map",
            MAX_ROWS,
            MAX_COLS
        );
        return SeatMap::default();
    }

    // Set для быстрого поиска проданных мест
    let booked: HashSet<&str> = schedule.booked_seats.iter().map(String::as_str).collect();
    let mut matched: HashSet<&str> = HashSet::new();
    let mut seats = Vec::with_capacity(schedule.capacity());

    // Для row_count/col_count <= 0 диапазоны пустые
    for r in 1..=schedule.row_count {
        let label = row_label(r as u32);

        for c in 1..=schedule.col_count {
            let col_label = c.to_string();
            let id = format!("{}{}", label, col_label);

            let status = match booked.get(id.as_str()) {
                Some(code) => {
                    matched.insert(*code);
                    SeatStatus::Occupied
                }
                None => SeatStatus::Available,
            };

            seats.push(Seat {
                id,
                row_label: label.clone(),
                col_label,
                status,
                seat_type: SeatType::Standard,
            });
        }
    }

    let mut unmatched: Vec<String> = Vec::new();
    for code in &schedule.booked_seats {
        if !matched.contains(code.as_str()) && !unmatched.contains(code) {
            unmatched.push(code.clone());
        }
    }

    SeatMap { seats, unmatched }
}

/// Схема зала для сеанса. Проданные места вне сетки молча отбрасываются,
/// в лог пишется только предупреждение.
pub fn generate_seats(schedule: &Schedule) -> Vec<Seat> {
    let map = build_seat_map(schedule);

    if !map.unmatched.is_empty() {
        warn!(
            schedule_id = schedule.schedule_id,
            rows = schedule.row_count,
            cols = schedule.col_count,
            "Ignoring {} booked seat code(s) outside the hall grid: {:?}",
            map.unmatched.len(),
            map.unmatched
        );
    }

    map.seats
}
