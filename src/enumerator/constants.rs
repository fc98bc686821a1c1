// Configuration constants for the enumerator module
pub const DEFAULT_RESULT_CAP: usize = 50_000;
