pub mod schedule;
pub mod seat;
pub mod booking;
pub mod media;

pub use schedule::{DateOption, HallGroup, Schedule, ScheduleGroups};
pub use seat::{Seat, SeatMap, SeatStatus, SeatType};
pub use booking::{BookingConfirmation, BookingDisplay, BookingRequest};
pub use media::{infer_media_type, MediaRef, MediaType};
