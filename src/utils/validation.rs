use validator::Validate;

use crate::errors::AppError;

pub const INVALID_EMPLOYEE_DATA: &str = "Invalid employee data";

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        log::debug!("payload rejected: {}", err);
        AppError::InvalidInput(INVALID_EMPLOYEE_DATA.to_string())
    })
}
