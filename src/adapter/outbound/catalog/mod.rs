//! Music-catalog adapter: token exchange plus the search client.

mod search;
mod token;

pub use search::CatalogClient;
pub use token::TokenSource;
