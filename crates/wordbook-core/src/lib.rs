pub mod cache;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod fetch;
pub mod lookup;
pub mod normalize;
pub mod preprocess;

pub use cache::{Cache, CachedValue, MemoryCache, cache_key};
pub use dictionary::{DictionaryMetadata, DictionarySource};
pub use error::LookupError;
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use lookup::LookupService;
