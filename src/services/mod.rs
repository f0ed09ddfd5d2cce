// Service exports
pub mod cache;
pub mod store;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use store::{DocumentStoreClient, StoreCollections, StoreError};
