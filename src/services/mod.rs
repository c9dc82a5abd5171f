pub mod dates;
pub mod schedule;
pub mod seat_map;
pub mod selection;

pub use dates::{date_options, date_options_from, Clock, FixedClock, LocalClock};
pub use schedule::{group_schedules_by_hall, group_schedules_by_hall_with, DEFAULT_HALL_TYPE};
pub use seat_map::{build_seat_map, generate_seats, row_label};
pub use selection::{clear_selection, selected_seat_codes, toggle_seat, total_price};
