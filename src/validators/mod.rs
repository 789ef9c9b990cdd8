//! Validators for Brazilian identifiers.
//!
//! Every validator normalizes its input and returns `Some(normalized)` when
//! it is valid, `None` otherwise. They never fail or panic on any `&str`.

pub mod plate;
pub mod renavam;
pub mod state_code;

pub use plate::{is_valid_plate, plate_format, to_mercosul, validate_plate, PlateFormat};
pub use renavam::{
    is_valid_renavam, renavam_check_digit, validate_renavam, RenavamFormat, RENAVAM_LEN,
    RENAVAM_MODULUS, RENAVAM_WEIGHTS,
};
pub use state_code::{is_valid_state_code, validate_state_code, StateCode};

fn rejected(kind: &'static str, input: &str, reason: &'static str) -> Option<String> {
    tracing::debug!(kind, input, reason, "Rejected identifier");
    None
}
