//! Middleware layers applied around the router.

pub mod cors;
pub mod request_id;
