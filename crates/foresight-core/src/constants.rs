/// Foresight system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delimiter separating event labels within one corpus row.
pub const SEQUENCE_DELIMITER: u8 = b';';

/// Delimiter used when rendering an action path for display.
pub const PATH_DELIMITER: &str = ",";

/// Lowest percentage the feature search may relax to before it lowers the
/// feature target instead.
pub const PERCENTAGE_FLOOR: u32 = 2;

/// Percentage the search resets to after lowering the feature target.
pub const PERCENTAGE_RESET: u32 = 100;
