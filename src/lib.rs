//! ROM launcher library
//!
//! Stages a working copy of a ROM, pairs it with an MSU track collection
//! picked from a console menu, delegates the shuffling to an external
//! randomizer service, and launches the configured application against the
//! staged file.

pub mod app;
pub mod cli;
pub mod config;
pub mod launch;
pub mod logging;
pub mod msu;
pub mod stage;
