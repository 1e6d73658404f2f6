pub mod doubles;
pub mod fetcher;
pub mod fixtures;
pub mod memory_store;

pub use doubles::{RecordingSink, ScriptedPicker};
pub use fetcher::ScriptedFetcher;
pub use memory_store::MemoryDataStore;
