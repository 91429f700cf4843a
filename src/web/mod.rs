pub mod core;
mod templates;

pub use self::core::start_server;
