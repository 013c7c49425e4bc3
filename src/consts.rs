/// Digit symbols, in order. Letters and digits that are easy to confuse
/// when handwritten (`l`, `I`, `O`, `0`, `1`, `2`, `5`, `7`) are left out.
pub const BASE54_SYMBOLS: &[u8; 54] = b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ34689";

/// Number of symbols in the alphabet
pub const BASE54_LEN: usize = 54;

/// Length of a datetag in characters
pub const TAG_LEN: usize = 3;

/// Seconds in one day
pub const DAY_SECONDS: i64 = 60 * 60 * 24;

/// Seconds in one week
pub const WEEK_SECONDS: i64 = DAY_SECONDS * 7;

/// Ticks per week
pub const TICKS_PER_WEEK: i64 = 52;

/// Seconds in one tick, `ceil(WEEK_SECONDS / TICKS_PER_WEEK)`
pub const TICK_SECONDS: i64 = (WEEK_SECONDS + TICKS_PER_WEEK - 1) / TICKS_PER_WEEK;

/// Fixed year length: one leap year plus two seconds.
/// Used both for the resolver's starting estimate and as the width of the
/// final table record's interval.
pub const YEAR_SECONDS: i64 = DAY_SECONDS * 366 + 2;

/// 2024-01-01 00:00:00 UTC
pub const TIME_BASE: i64 = 1_704_067_200;

/// Year of the Unix epoch
pub const UNIX_YEAR: i64 = 1970;

/// Year encoded as year index 0
pub const BASE_YEAR: i64 = 2024;

/// Number of years covered by the embedded boundary table
pub const TABLE_SIZE: usize = 52;

/// Largest random suffix value (inclusive)
pub const SUFFIX_MAX: u32 = 53 * 53 * 53;

/// Separates the datetag from its random suffix
pub const SUFFIX_SEPARATOR: char = '-';
