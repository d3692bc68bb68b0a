pub mod cache;
pub mod liftover;
