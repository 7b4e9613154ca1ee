pub mod booking;
pub mod statistics;
pub mod store;
pub mod validation;

pub use booking::BookingService;
pub use statistics::dashboard_stats;
pub use store::AppointmentStore;
pub use validation::validate_booking;
