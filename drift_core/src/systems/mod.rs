pub mod drift;
pub mod movement;
pub mod particles;
pub mod steering;
pub mod velocity;

pub use drift::*;
pub use movement::*;
pub use particles::*;
pub use steering::*;
pub use velocity::*;
