pub mod attack;
pub mod combat;
pub mod energy;
pub mod gc;
pub mod input;
pub mod movement;
pub mod outcome;

pub use attack::*;
pub use combat::*;
pub use energy::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
pub use outcome::*;
