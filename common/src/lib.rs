pub mod config;
pub mod duration;
pub mod host;
pub mod outcome;
