pub mod cli_main;

pub mod cli_catalog;
pub mod cli_lab;
pub mod cli_log;
pub mod cli_lookup;
pub mod cli_settings;
pub mod lab_help;
