pub mod config;
pub mod logging;

pub mod cookie_url;
pub mod generator;
pub mod store;
pub mod types;

pub use cookie_url::{encode, EncodeError};
pub use generator::{generate, GenerateError, Generated};
pub use store::Store;
pub use types::{Cookie, HistoryEntry, Preset};
