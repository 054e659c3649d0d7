// src/lib.rs

//! Mesonet Ticker feed generator library.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
