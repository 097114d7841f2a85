mod cache;
mod ds_store;
mod temp;

pub use cache::Cache;
pub use ds_store::DsStore;
pub use temp::Temp;
