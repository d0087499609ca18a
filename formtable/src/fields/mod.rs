//! Custom field value marshalling

mod days_of_week;
mod multi_value;

pub use days_of_week::DaysOfWeek;
pub use multi_value::MultiValueCodec;
