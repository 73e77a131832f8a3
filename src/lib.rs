pub mod catalog;
pub mod global;
pub mod quiz;
pub mod sdk;
pub mod util;
