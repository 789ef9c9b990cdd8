use crate::domain::conversion::ConversionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartecError {
    #[error("Year {year} and month {month} do not form a valid calendar month")]
    OutOfRange { year: i32, month: u32 },

    #[error("Invalid conversion from YearMonth to {target}")]
    InvalidConversion { target: ConversionKind },

    #[error("Cannot parse year-month from '{value}'")]
    Parse { value: String },

    #[error("Invalid format pattern: '{format}'")]
    InvalidFormat { format: String },

    #[error("Unknown state code: '{value}'")]
    UnknownStateCode { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SmartecError {
    /// 是否為設定相關錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SmartecError::ConfigError { .. } | SmartecError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SmartecError>;
