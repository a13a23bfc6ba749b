pub mod error;
pub mod lookup;

pub use error::ErrorResponse;
pub use lookup::LookupQuery;
