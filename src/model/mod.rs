pub mod change;
pub mod connection;
pub mod node;
pub mod phase;
pub mod state;
pub mod status;

pub use change::*;
pub use connection::*;
pub use node::*;
pub use phase::*;
pub use state::*;
pub use status::*;
