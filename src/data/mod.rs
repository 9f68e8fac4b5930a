pub mod catalog;

pub use catalog::{MarketCatalog, DEFAULT_TOP_CROPS};
