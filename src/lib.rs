#[allow(non_snake_case)]
pub mod Lab;
#[allow(non_snake_case)]
pub mod Reactions;
#[allow(non_snake_case)]
pub mod Substances;
pub mod cli;
pub mod config_manager;
pub mod settings;
