use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theater_booking::{
    AppState,
    config::Config,
    format::{error_message, format_currency},
    models::{BookingDisplay, BookingRequest, Seat, SeatStatus},
    services::{date_options, generate_seats, group_schedules_by_hall_with, toggle_seat},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting theater booking console ({})", config.app.environment);

    let state = AppState::new(config).context("Failed to build API client")?;
    let tmdb_id = state.config.booking.tmdb_id;

    // --- Dates ---
    let dates = date_options(&*state.clock());
    for d in &dates {
        println!("{:<12} {:<6} {}", d.value, d.label, d.day);
    }
    let date = dates.first().context("No selectable dates")?.value.clone();

    // --- Schedules ---
    let schedules = match state.client.get_schedules(tmdb_id, &date).await {
        Ok(schedules) => schedules,
        Err(e) => {
            error!("{}", error_message(&e));
            return Err(e.into());
        }
    };

    let groups = group_schedules_by_hall_with(&schedules, &state.config.booking.default_hall_type);
    for group in &groups {
        println!("[{}]", group.hall_type);
        for s in &group.schedules {
            println!(
                "  #{:<6} {}  {:<16} {}",
                s.schedule_id,
                s.show_time,
                s.hall_name,
                format_currency(Some(s.price))
            );
        }
    }

    let Some(schedule) = groups.iter().next().and_then(|g| g.schedules.first()) else {
        info!("No schedules for tmdb_id={} on {}", tmdb_id, date);
        return Ok(());
    };

    // --- Seat map ---
    let mut seats = generate_seats(schedule);
    println!("{}", render_seat_grid(&seats, schedule.col_count));

    // --- Booking ---
    if state.config.booking.book_seats.is_empty() {
        return Ok(());
    }

    for code in &state.config.booking.book_seats {
        if let Err(e) = toggle_seat(&mut seats, code) {
            warn!("Skipping seat {}: {}", code, e);
        }
    }

    let display = BookingDisplay {
        poster_url: String::new(),
        cinema_name: state.config.booking.cinema_name.clone(),
    };
    let request = BookingRequest::from_selection(schedule, &display, &seats)?;

    match state.client.create_booking(&state.auth, &request).await {
        Ok(confirmation) => {
            info!(
                "Booked {:?} for {}",
                request.seats,
                format_currency(Some(request.total_price))
            );
            println!("{}", confirmation.raw);
            Ok(())
        }
        Err(e) => {
            error!("{}", error_message(&e));
            Err(e.into())
        }
    }
}

// Одна строка на ряд: "." свободно, "x" занято, "o" выбрано
fn render_seat_grid(seats: &[Seat], cols: i32) -> String {
    if cols <= 0 {
        return String::new();
    }

    seats
        .chunks(cols as usize)
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|s| match s.status {
                    SeatStatus::Available => '.',
                    SeatStatus::Occupied => 'x',
                    SeatStatus::Selected => 'o',
                })
                .collect();
            let label = row.first().map(|s| s.row_label.as_str()).unwrap_or_default();
            format!("{:>3} {}", label, cells)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
