// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod fetcher;
pub mod file;
pub mod progress;
pub mod roster;
pub mod runner;
pub mod session;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
