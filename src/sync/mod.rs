pub mod store;

pub use store::{SyncState, SyncStore};
