#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod equipment;
mod error;
mod exercise;
mod plan;
mod prescription;
mod profile;
mod random;
mod schedule;
mod selection;
mod settings;
mod variety;

pub use catalog::Catalog;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use prescription::*;
pub use profile::*;
pub use random::*;
pub use schedule::*;
pub use selection::*;
pub use settings::*;
pub use variety::*;
