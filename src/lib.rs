pub mod commands;
pub mod platform;
pub mod release;
pub mod selection;
