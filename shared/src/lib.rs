//! Engine-agnostic simulation for the first-person sandbox
//!
//! Movement rules, kinematics and the drawable object model. The client owns
//! windows, input devices and rendering.

pub mod keybinds;
pub mod kinematics;
pub mod math;
pub mod objects;
pub mod player;

pub use keybinds::Keybinds;
pub use kinematics::Kinematics;
pub use objects::{quad_geometry, Drawable, GameObject, ModelKind, QuadGeometry, UNIT_TILE};
pub use player::{
    MovementTuning, PlayerIntent, PlayerState, ProjectileTuning, EYE_HEIGHT, GRAVITY,
    JUMP_VELOCITY,
};

/// Ground tiles extend this many units from the origin on X and Z.
pub const GROUND_HALF_EXTENT: i32 = 10;

/// World axis lines run from -AXIS_LENGTH to +AXIS_LENGTH.
pub const AXIS_LENGTH: f32 = 1000.0;
