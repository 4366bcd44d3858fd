#![warn(rust_2018_idioms, rust_2018_compatibility)]

pub mod app;
pub mod common;
pub mod frontend;
