pub mod handlers;
pub mod server;
pub mod types;

pub use handlers::MarketHandler;
pub use server::{ApiServer, AppState};
pub use types::*;
