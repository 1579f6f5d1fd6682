//! Directional resolution over loop line station sequences.
//!
//! Given the ordered stations of a loop line and the rider's slot in that
//! order, find the station that should name each traversal direction. The
//! scan wraps past the sequence edges and transparently skips stations
//! that are the rider's own stop under another record.

mod resolve;
mod scan;

pub use resolve::{Bound, DirectionalBounds, ResolveError, resolve, resolve_both};
