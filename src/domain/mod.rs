pub mod category;
pub mod item;

pub use category::CategoryBlock;
pub use item::FeedItemSummary;
