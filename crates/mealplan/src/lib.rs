mod grid;
mod week;

pub use grid::*;
pub use week::*;
