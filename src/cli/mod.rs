//! CLI module - argument parsing and interactive selection menus

mod args;
mod prompts;
mod select;

pub use args::Cli;
pub use prompts::{parse_index, read_index};
pub use select::{choose_msu_type, choose_msus, filter_msus, interpret_choice, MsuChoice};
