pub mod alias;
pub mod error_handle;
pub mod random;
pub mod traits;
