//! Traversal direction over a station sequence.

/// Direction of travel around a line's station sequence.
///
/// `Forward` walks toward increasing index and wraps past the end of the
/// sequence; `Backward` walks toward decreasing index and wraps past the
/// start. On loop lines these correspond to the outbound and inbound
/// labels respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}
