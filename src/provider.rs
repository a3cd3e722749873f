//! Provider-facing descriptors.
//!
//! `descriptor` exposes validated metadata (`ProviderDescriptor`) covering the token
//! endpoint, the REST API base, the grant used for server-to-server access, and the
//! client authentication preference.

pub mod descriptor;

pub use descriptor::*;
