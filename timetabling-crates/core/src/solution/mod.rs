//! Turning a model of the encoding back into a schedule.

mod decoder;
mod model;
mod schedule;

pub use decoder::decode_model;
pub use model::*;
pub use schedule::*;
