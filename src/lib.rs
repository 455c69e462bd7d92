#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod attack;
mod board;
#[cfg(feature = "std")]
mod cli;
pub mod command;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod sim;
#[cfg(feature = "std")]
pub mod ui;

pub use attack::*;
pub use board::*;
#[cfg(feature = "std")]
pub use cli::run_menu;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use sim::*;
