pub mod pool;
pub mod schema;
pub mod store;

pub use pool::create_pool;
pub use schema::Column;
pub use store::{CafeStore, StoreError};
