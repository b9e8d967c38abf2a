//! Global constants for rift-mc

pub mod errors {
    // Error Codes
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    pub const MALFORMED_KEY_VECTOR: &str = "MALFORMED_KEY_VECTOR";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const STALE_RECORD: &str = "STALE_RECORD";
    pub const COUNT_TOO_LARGE: &str = "COUNT_TOO_LARGE";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
}

pub mod keys {
    /// Find/till motions whose pending target key must survive when the
    /// operator keys read before and after the motion are equal
    pub const TARGET_PENDING: &[char] = &['t', 'f'];
}
