//! PlaceHub command-line interface.
//!
//! Exposes the clap command tree; the `placehub` binary parses it and
//! calls [`Cli::execute`].

pub mod commands;
pub mod output;

pub use commands::Cli;
