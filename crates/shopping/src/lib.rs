pub mod aggregation;
pub mod fridge;
pub mod item;
pub mod sort;

pub use aggregation::{ShoppingLine, aggregate};
pub use fridge::net_of_fridge;
pub use item::{ShoppingItem, items_for_schedule};
pub use sort::{SortBy, SortOrder, sort_lines};
