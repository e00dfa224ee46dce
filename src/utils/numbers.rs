use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a list such as `"25, 50 3,7"`; commas and whitespace both separate.
///
/// # Errors
///
/// Returns an error if any item is not an integer. An empty list parses to
/// an empty vector; use [`validate_operands`](crate::utils::validate_operands)
/// to reject it.
pub fn parse_number_list(input: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing number list: '{}'", input);

    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>().map_err(|_| {
                warn!("Invalid number in list: '{}'", item);
                UtilsError::InvalidNumber(item.to_string())
            })
        })
        .collect()
}
