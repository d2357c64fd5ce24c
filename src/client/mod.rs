//! Client-side data layer: typed wrappers over the HTTP API, the list state a
//! screen keeps between refreshes, and the display formatting it applies.

pub mod api_client;
pub mod format;
pub mod local_list;

pub use api_client::{ClientError, FinanceClient};
pub use local_list::LocalList;
