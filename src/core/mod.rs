//! Core translation engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod formalizer;
pub mod models;
pub mod session;
pub mod stub;
