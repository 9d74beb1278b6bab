//! CRUD facade - validates and normalizes inbound records before delegating
//! to the stores.
//!
//! Validation failures are detected here and returned before any I/O; the
//! stores only ever see well-formed records. The transport layer maps the
//! resulting errors onto status codes.

pub mod contracts;
pub mod licenses;
