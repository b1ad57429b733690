pub mod gateway;
pub mod traits;
