mod advise;
mod context;
mod init;
mod scan;

pub use advise::{run_advise, run_advise_impl};
pub use context::{color_choice_to_mode, exit_code_for, load_config, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use scan::{ScanOptions, run_scan, run_scan_impl, scan_project};
