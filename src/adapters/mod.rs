// Adapters layer: concrete implementations of the domain ports.

pub mod lookup;
pub mod storage;

pub use lookup::FileDefinitionLookup;
pub use storage::LocalFeedStore;
