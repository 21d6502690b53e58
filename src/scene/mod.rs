pub mod scene;

pub use scene::{Bodies, BodyId, Scene};
