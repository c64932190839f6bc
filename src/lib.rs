pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod public_info;
pub mod sanitize;
pub mod services;
pub mod templates_structs;
pub mod validate;
