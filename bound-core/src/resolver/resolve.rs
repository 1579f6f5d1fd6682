//! Wraparound search for the station that names a direction.

use tracing::trace;

use crate::domain::{Direction, Station};

use super::scan::{primary_window, secondary_window};

/// Error for malformed resolver input.
///
/// These are caller contract violations. They are rejected at the boundary
/// rather than allowed to produce a plausible-looking wrong answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The station sequence was empty.
    #[error("station sequence is empty")]
    EmptySequence,

    /// The rider's index does not point into the sequence.
    #[error("current index {index} is out of bounds for {len} stations")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A resolved direction target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound<'a> {
    /// The station that represents the direction.
    pub station: &'a Station,

    /// Raw label seed for the presentation layer: the found station's own
    /// name. Phrase composition and translation happen outside this crate.
    pub bound_for: &'a str,
}

/// The direction targets of one position, one per traversal sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalBounds<'a> {
    pub forward: Option<Bound<'a>>,
    pub backward: Option<Bound<'a>>,
}

/// Find the station that names `direction` from the rider's position.
///
/// Scans the sequence in direction order, skipping every station in the
/// rider's own group, and returns the first survivor. When the primary
/// window is exhausted without a survivor the search extends past the wrap
/// point once more before giving up.
///
/// Returns `Ok(None)` when no station outside the rider's group exists at
/// all (a loop with fewer than two distinct groups). Callers should treat
/// that as "label unavailable", not as an error.
pub fn resolve<'a>(
    stations: &'a [Station],
    current: usize,
    direction: Direction,
) -> Result<Option<Bound<'a>>, ResolveError> {
    if stations.is_empty() {
        return Err(ResolveError::EmptySequence);
    }
    if current >= stations.len() {
        return Err(ResolveError::IndexOutOfBounds {
            index: current,
            len: stations.len(),
        });
    }

    let len = stations.len();
    let here = &stations[current];

    let found = first_outside_group(stations, here, primary_window(len, current, direction))
        .or_else(|| {
            trace!(
                ?direction,
                current,
                "primary window exhausted, extending past the wrap point"
            );
            first_outside_group(stations, here, secondary_window(len, current, direction))
        });

    Ok(found.map(|station| Bound {
        station,
        bound_for: station.name.as_str(),
    }))
}

/// Resolve both traversal senses of one position in a single call.
///
/// The consumer renders both direction choices at once, so this is the
/// usual entry point.
pub fn resolve_both<'a>(
    stations: &'a [Station],
    current: usize,
) -> Result<DirectionalBounds<'a>, ResolveError> {
    Ok(DirectionalBounds {
        forward: resolve(stations, current, Direction::Forward)?,
        backward: resolve(stations, current, Direction::Backward)?,
    })
}

/// First station in window order that is not the rider's own stop.
fn first_outside_group<'a>(
    stations: &'a [Station],
    here: &Station,
    window: impl Iterator<Item = usize>,
) -> Option<&'a Station> {
    window
        .map(|idx| &stations[idx])
        .find(|station| !station.same_group(here))
}
