pub mod day_record;
pub mod day_summary;
pub mod period;
pub mod state;
