//! selection.rs
//!
//! Клиентский выбор мест и сборка запроса на бронирование.
//! Статус `Selected` живет только здесь, генератор схемы его не выдает.

use tracing::debug;

use crate::error::BookingError;
use crate::models::{BookingDisplay, BookingRequest, Schedule, Seat, SeatStatus};

/// Переключает место: свободное -> выбранное -> свободное.
/// Занятое место выбрать нельзя.
pub fn toggle_seat(seats: &mut [Seat], code: &str) -> Result<SeatStatus, BookingError> {
    let seat = seats
        .iter_mut()
        .find(|s| s.id == code)
        .ok_or_else(|| BookingError::SeatNotFound(code.to_string()))?;

    seat.status = match seat.status {
        SeatStatus::Available => SeatStatus::Selected,
        SeatStatus::Selected => SeatStatus::Available,
        SeatStatus::Occupied => return Err(BookingError::SeatOccupied(code.to_string())),
    };

    debug!("Seat {} is now {:?}", code, seat.status);
    Ok(seat.status)
}

/// Снимает выбор со всех мест
pub fn clear_selection(seats: &mut [Seat]) {
    for seat in seats.iter_mut().filter(|s| s.status == SeatStatus::Selected) {
        seat.status = SeatStatus::Available;
    }
}

/// Коды выбранных мест в порядке схемы
pub fn selected_seat_codes(seats: &[Seat]) -> Vec<String> {
    seats
        .iter()
        .filter(|s| s.status == SeatStatus::Selected)
        .map(|s| s.id.clone())
        .collect()
}

pub fn total_price(unit_price: f64, count: usize) -> f64 {
    unit_price * count as f64
}

impl BookingRequest {
    /// Собирает запрос из выбранных мест. Итоговая цена = цена билета × число мест.
    pub fn from_selection(
        schedule: &Schedule,
        display: &BookingDisplay,
        seats: &[Seat],
    ) -> Result<Self, BookingError> {
        let codes = selected_seat_codes(seats);
        if codes.is_empty() {
            return Err(BookingError::EmptySelection);
        }

        Ok(BookingRequest {
            schedule_id: schedule.schedule_id,
            tmdb_id: schedule.tmdb_id,
            movie_title: schedule.movie_title.clone(),
            poster_url: display.poster_url.clone(),
            cinema_name: display.cinema_name.clone(),
            show_date: schedule.show_date.clone(),
            show_time: schedule.show_time.clone(),
            total_price: total_price(schedule.price, codes.len()),
            seats: codes,
        })
    }
}
