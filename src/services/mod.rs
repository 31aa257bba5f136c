// Service exports
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod store;

pub use matching::{MatchError, MatchingService, DEFAULT_EVENT_LIMIT, DEFAULT_GLOBAL_LIMIT};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use store::{MatchStore, StoreError};
