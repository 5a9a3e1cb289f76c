pub mod break_window;
pub mod day_type;
pub mod record;
pub mod rounding_policy;
pub mod time_of_day;
