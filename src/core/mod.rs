mod field;
pub use field::*;
mod moves;
pub use moves::*;
mod renames;
pub use renames::*;
mod compiler;
pub use compiler::*;
mod apply;
pub use apply::*;
