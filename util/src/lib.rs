//! Unopinionated standalone utilities.

mod geom;
pub use geom::{lift, look_rotation, planar, rotate_about};

mod idm;
pub use idm::{load_idm, save_idm};

mod rng;
pub use rng::{srng, RngExt};

pub type FastHasher = rustc_hash::FxHasher;

/// Good default concrete rng.
pub type GameRng = rand_xorshift::XorShiftRng;
