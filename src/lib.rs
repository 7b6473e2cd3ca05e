#![no_std]

#[cfg(test)]
extern crate std;

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::config::Config;
pub use crate::device::Adxl355;
pub use crate::error::{Error, Result};
pub use crate::sample::AxisSample;
