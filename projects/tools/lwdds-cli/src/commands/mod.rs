pub mod half;
pub mod write;
