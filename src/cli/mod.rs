mod fridge;
mod plan;
mod session;
mod shopping;

pub use fridge::{fridge, stock};
pub use plan::{grid, schedule, unschedule, week};
pub use session::{connect, login, App};
pub use shopping::{shopping, SortColumn};
