mod resolve_with_cache;

pub use resolve_with_cache::{ResolveWithCacheUseCase, MAX_CACHE_PASSES};
