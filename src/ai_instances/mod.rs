pub mod models;
pub mod store;

pub use models::Instance;
pub use store::InstanceStore;
