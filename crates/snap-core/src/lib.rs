pub mod config;
pub mod error;
pub mod traits;

pub use config::SnapConfig;
pub use error::{Result, SnapError};
pub use traits::Validate;
