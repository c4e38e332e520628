mod check;
mod config;
mod context;
mod init;

pub use check::run_check;
pub use config::run_config;
pub use context::Reporter;
pub use init::{generate_config_template, run_init, run_init_impl};
