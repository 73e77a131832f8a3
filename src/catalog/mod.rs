pub mod mapper;
pub mod model;
pub mod queries;
pub mod store;

pub use model::Country;
pub use store::CountryCatalog;
