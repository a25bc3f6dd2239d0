//! Request building for the build-status REST endpoint.
//!
//! This module turns caller-supplied build data into the three pieces
//! of an outgoing notification:
//! - The target URL ([`build_status_url`])
//! - The JSON body ([`StatusPayload`])
//! - The Basic authorization value ([`authorization_header_value`])
//!
//! Nothing here touches the network.

mod auth;
mod error;
mod payload;
mod state;
mod url;


pub use auth::authorization_header_value;
pub use error::InvalidBaseUrl;
pub use payload::{MAX_NAME_CHARS, StatusPayload, first_line};
pub use state::BuildState;
pub use url::{BUILD_STATUS_PATH, build_status_url, validate_base_url};
