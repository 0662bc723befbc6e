#![no_std]

pub mod pinout;
pub mod radio_spi;
