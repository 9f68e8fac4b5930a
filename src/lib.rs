pub mod api;
pub mod assistant;
pub mod data;
pub mod error;
pub mod server;
pub mod types;

pub use error::{Error, Result};
pub use server::{parse_server_address, AssistantConfig, Server};
