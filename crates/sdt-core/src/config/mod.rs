//! Configuration system.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod report_config;
pub mod sdt_config;

pub use report_config::ReportConfig;
pub use sdt_config::{ConfigOverrides, SdtConfig};
