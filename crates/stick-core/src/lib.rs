pub mod axis;
pub mod gesture;
pub mod key;
pub mod model;
pub mod normalize;
pub mod options;

pub use axis::{Axis, derive_axes};
pub use gesture::Gesture;
pub use key::{HORIZONTAL_KEYS, KeyBinding, KeyCode, Pull, VERTICAL_KEYS};
pub use model::{AxisState, Joystick, Vector2};
pub use normalize::{NormalizePolicy, Normalized, normalize};
pub use options::Options;
