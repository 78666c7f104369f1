pub mod crash_report;
pub mod error;
pub mod paths;

pub use crash_report::write_crash_report;
pub use error::PlatformError;
pub use paths::{
    config_dir, config_file, crash_report_dir, data_dir, default_working_dir, ensure_dirs,
    launcher_dir,
};
