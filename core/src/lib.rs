#![no_std]

extern crate alloc;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod types;
