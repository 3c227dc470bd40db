//! Domain entities - Core business objects with no external dependencies

pub mod forecast;
pub mod intent;
pub mod message;

pub use forecast::{Coordinates, ForecastBundle, ForecastDay};
pub use intent::{Entity, EntityKind, Intent, RecognizedIntent};
pub use message::{IncomingMessage, Reply};
