//! Canvas-side input handling: click pairing, raw surface events and
//! connection gestures.

pub mod click;
pub mod connections;
pub mod events;

pub use click::{ClickDisambiguator, ClickState};
pub use connections::ConnectionManager;
pub use events::{CanvasEvent, EndpointParser, PrefixEndpointParser};
