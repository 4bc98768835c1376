//! Service representations: declaring them in code and moving them
//! through JSON.
//!
//! A representation document looks like:
//!
//! ```json
//! {
//!   "name": "orders",
//!   "capabilities": { "contracts": [ ... ] },
//!   "expectations": { "providerNameToContracts": { "billing": [ ... ] } }
//! }
//! ```

mod builder;
mod io;

pub use builder::ServiceBuilder;
pub use io::{parse_contracts, parse_service, read_service, to_json_string, write_service};
