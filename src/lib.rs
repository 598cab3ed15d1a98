#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod auton_routines;
pub mod config;
pub mod diagnostics;
pub mod drive;
pub mod journal;
pub mod motion;
pub mod ports;
pub mod pose;
pub mod sequencer;
pub mod session;
pub mod sink;
pub mod units;
pub mod utils;

#[cfg(target_os = "vexos")]
pub mod devices;
#[cfg(target_os = "vexos")]
pub mod logger;
