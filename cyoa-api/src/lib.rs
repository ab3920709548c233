pub mod error;
pub mod limits;
pub mod request;
pub mod response;

pub use error::TransportError;
pub use request::{QueryError, SearchMode, SearchQuery, MIN_QUERY_CHARS};
pub use response::{
    CatalogEntry, CatalogPayload, GameId, MatchType, SearchResponse, SearchResultEntry, Stats,
};
