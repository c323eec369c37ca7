pub mod commands;
pub mod executor;
pub mod hinting;
pub mod history;
pub mod session;
