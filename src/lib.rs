pub mod config;
pub mod connector;
pub mod errors;
pub mod fetch;
pub mod fields;
pub mod frequency;
pub mod protocol;
mod runner;
pub mod seq;

use crate::errors::ConnectorError;

pub fn run() -> Result<(), ConnectorError> {
    runner::run()
}
