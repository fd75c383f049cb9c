//! Shared constants.

/// Environment variable holding the `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "SDT_LOG";

/// Filter used when `SDT_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "sdt=info";

/// Project config file name, looked up in the caller-supplied root.
pub const CONFIG_FILE_NAME: &str = "sdt.toml";

/// Decimal places used when rendering statistics.
pub const DEFAULT_REPORT_PRECISION: usize = 4;

/// Upper bound on rendering precision; f64 carries ~15-17 significant digits.
pub const MAX_REPORT_PRECISION: usize = 15;
