pub mod config;
pub mod domain;
pub mod utils;
pub mod validators;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ValidationConfig;

pub use domain::conversion::{ConversionKind, Converted};
pub use domain::year_month::YearMonth;
pub use utils::error::{Result, SmartecError};
pub use utils::text::{between, between_until_end, UNTIL_END};
pub use validators::{
    is_valid_plate, is_valid_renavam, is_valid_state_code, validate_plate, validate_renavam,
    validate_state_code, PlateFormat, RenavamFormat, StateCode,
};
