#![no_std]

pub mod pinout;
pub mod serial;
pub mod tick_timer;
