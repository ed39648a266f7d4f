pub mod config;
pub mod constants;
pub mod http;
pub mod string_manipulators;
