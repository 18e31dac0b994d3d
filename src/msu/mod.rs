//! MSU value objects and the external randomizer service boundary

mod randomizer;
mod service;
mod types;

pub use randomizer::MsuRandomizer;
pub use service::{MsuService, MsuServiceError};
pub use types::{Msu, MsuType, ShuffleRequest};
