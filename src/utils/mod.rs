pub mod crypto;
pub mod sampling;
