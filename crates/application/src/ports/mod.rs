mod cache_entry_repository;
mod clock;
mod record_resolver;

pub use cache_entry_repository::CacheEntryRepository;
pub use clock::Clock;
pub use record_resolver::RecordResolver;
