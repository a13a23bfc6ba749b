pub mod cache_entry_repository;

pub use cache_entry_repository::SqliteCacheEntryRepository;
