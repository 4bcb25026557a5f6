//! [`SearchProvider`](carepick_api::SearchProvider) over the agency REST API.
//!
//! Each record kind maps to a collection endpoint. Searches hit
//! `GET {base}/{collection}?search=..&limit=..`, lookups hit
//! `GET {base}/{collection}/{id}`. Records are turned into candidates with a
//! [`LabelTemplate`].

mod decode;
mod endpoint;
mod label;
mod provider;

pub use decode::{decode_candidates, decode_record};
pub use endpoint::{DEFAULT_ID_FIELD, DEFAULT_LIMIT_PARAM, DEFAULT_QUERY_PARAM, RestEndpoint};
pub use label::LabelTemplate;
pub use provider::{RestOptions, RestSearchProvider, parse_base_url};
pub use reqwest::Url;
