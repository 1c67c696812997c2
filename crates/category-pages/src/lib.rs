#![doc = include_str!("../README.md")]

mod generator;
mod page;
mod taxonomy;

pub use generator::*;
pub use page::*;
pub use taxonomy::*;
