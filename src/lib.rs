//! Static configuration table for the CATYXX sensor firmware.
//!
//! Two groups of values:
//! - [`config::CONFIG`]: per-deployment defaults baked in at compile time from
//!   `cfg.toml` (device name, Wi-Fi credentials, measurement interval).
//! - [`constants`]: build-fixed timing and hardware parameters.
//!
//! Everything is `const`; nothing is mutated or reloaded at run time.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;

pub use config::{Config, CONFIG};
