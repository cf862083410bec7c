//! The domain module encapsulates the core game logic. It defines the obstacle `ObstacleRegistry`
//! and the stateless movement `engine`, along with the rules governing how a player moves
//! through an arena full of rectangular obstacles.
//!
//! Nothing in here depends on Bevy's ECS, so the rules can be exercised without a window or a
//! running app.

mod basis;
mod collision;
mod config;
mod driver;
mod engine;
mod input;
mod registry;

pub use basis::{Position, Size};
pub use collision::{GeometryError, HasCollision, Rectangle};
pub use config::MovementConfig;
pub use driver::{Driver, FrameClock};
pub use engine::{resolve, step, Movement, Resolution};
pub use input::{Direction, HeldDirections};
pub use registry::{Obstacle, ObstacleRegistry, ObstacleSnapshot};
