//! Lookup layer: Cicero HTTP client, query state machine, Places autocomplete.

mod error;
pub mod client;
pub mod executor;
pub mod places;
pub mod response;

pub use client::{CiceroClient, Endpoint, RepresentativeLookup};
pub use error::{EMPTY_RESULT_MESSAGE, LookupError, TRANSPORT_MESSAGE};
pub use executor::{QueryExecutor, QueryState, Submission};
pub use places::{PlacesClient, PlacesConfig, PlacesError, PlacesLoader};
pub use response::{Lookup, interpret};
