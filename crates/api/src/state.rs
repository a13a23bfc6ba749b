use ferrous_lookup_application::use_cases::ResolveWithCacheUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_with_cache: Arc<ResolveWithCacheUseCase>,
}
