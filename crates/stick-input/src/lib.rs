pub mod input;
pub mod instance;
pub mod keys;
pub mod source;
pub mod state;

pub use input::{Button, EventKind, InputEvent};
pub use instance::Input;
pub use source::{EventBus, EventSource, Handler, ListenerId};
pub use state::InputState;
