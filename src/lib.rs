pub mod config;
pub mod core;
pub mod dictionary;
pub mod errors;
pub mod extensions;
pub mod extract;
pub mod logging;
