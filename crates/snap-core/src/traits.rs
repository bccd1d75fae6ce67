use crate::error::Result;

/// Check that a value is usable before it is handed to the engine.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
