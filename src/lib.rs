pub mod error;
pub mod file;
pub mod models;
pub mod parser;
pub mod services;
pub mod store;
