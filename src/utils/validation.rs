use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the list is empty or contains a value below 1.
pub fn validate_operands(values: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating operands: {:?}", values);

    if values.is_empty() {
        warn!("Operand list is empty");
        return Err(UtilsError::EmptyNumberList);
    }

    if let Some(&bad) = values.iter().find(|&&v| v < 1) {
        warn!("Operand list contains non-positive value {}", bad);
        return Err(UtilsError::NonPositiveNumber(bad));
    }

    debug!("Operand validation successful");
    Ok(())
}
