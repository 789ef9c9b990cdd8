// Value types. No I/O here.

pub mod conversion;
pub mod year_month;
