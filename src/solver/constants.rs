// Default target range: three-digit numbers
pub const DEFAULT_LOWER_TARGET: i64 = 101;
pub const DEFAULT_UPPER_TARGET: i64 = 999;
