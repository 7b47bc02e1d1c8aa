/// Property that opens a directory block.
pub const BEGIN: &str = "BEGIN";
/// Property that closes a directory block.
pub const END: &str = "END";

/// Number of value characters written before a continuation line is started.
pub const DEFAULT_FOLD_WIDTH: usize = 76;

/// Line terminator for every content line.
pub const CRLF: &str = "\r\n";
/// Prefix of a continuation line.
pub const FOLD: &str = const_str::concat!(CRLF, " ");

/// Name of the optional configuration file, without extension.
pub const CONFIG_FILE_NAME: &str = "vdir";
/// Prefix of environment variables read into the settings.
pub const ENV_PREFIX: &str = const_str::convert_ascii_case!(upper, CONFIG_FILE_NAME);
