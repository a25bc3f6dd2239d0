//! stash-notify: build status reporting for Bitbucket Server (Stash)
//!
//! A library for posting the state of a build for a commit revision
//! to the `/rest/build-status/1.0/commits/{revision}` endpoint.

pub mod client;
pub mod config;
pub mod status;
pub mod transport;
