use crate::error::Result;

/// Validate that a value is usable before it drives any computation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
