//! Configuration constants.

/// WHOIS client invoked when no `--whois-command` is given.
pub const DEFAULT_WHOIS_COMMAND: &str = "whois";

/// Environment variable that overrides the WHOIS client.
pub const WHOIS_COMMAND_ENV: &str = "WHOIS_COMMAND";

/// Output directory used when no `--output-dir` is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Extension appended to the domain to build the output file name.
pub const CSV_EXTENSION: &str = "csv";
