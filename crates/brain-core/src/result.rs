use crate::error::BrainError;

pub type BrainResult<T> = Result<T, BrainError>;
