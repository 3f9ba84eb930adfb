/// Error code registry for collection-kit
///
/// Error codes are organized by category:
/// - 1000-1999: Shape errors (unsupported or mismatched collection shapes)
/// - 2000-2999: Reduction errors
/// - 3000-3999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Shape errors (1000-1999)
    pub const SHAPE_UNSUPPORTED: u16 = 1001;
    pub const SHAPE_MISMATCH: u16 = 1002;

    // Reduction errors (2000-2999)
    pub const REDUCE_EMPTY: u16 = 2001;

    // Configuration errors (3000-3999)
    pub const CONFIG_GENERIC: u16 = 3000;
    pub const CONFIG_NOT_FOUND: u16 = 3001;
    pub const CONFIG_PARSE_ERROR: u16 = 3002;
    pub const CONFIG_IO_ERROR: u16 = 3003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Shape errors
        1001 => "Value is neither a sequence nor a mapping",
        1002 => "Operation does not accept this collection shape",

        // Reduction errors
        2001 => "Reduce of an empty collection without an initial value",

        // Configuration errors
        3000 => "Generic configuration error",
        3001 => "Configuration file not found",
        3002 => "Failed to parse configuration",
        3003 => "Configuration I/O error",

        _ => "Unknown error code",
    }
}
