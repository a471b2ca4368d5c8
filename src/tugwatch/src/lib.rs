#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod index_builder;
pub mod settings;
pub mod startup;

pub use error::{Error, Result};
pub use index_builder::*;
pub use settings::*;
pub use startup::*;
