pub mod lookup;

pub use lookup::ResolveWithCacheUseCase;
