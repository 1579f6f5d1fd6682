//! Loop line classification.
//!
//! Whether a line is a closed loop, and how its two directions are named,
//! is a property of the physical network rather than anything derivable
//! from a station list. The set of loop lines is small and fixed, so
//! classification is a total lookup over known line ids.

use crate::domain::LineId;

/// The Yamanote line (JR East).
pub const YAMANOTE_LINE: LineId = LineId(11302);

/// The Osaka Loop line (JR West).
pub const OSAKA_LOOP_LINE: LineId = LineId(11623);

/// The Meijo line (Nagoya municipal subway).
pub const MEIJO_LINE: LineId = LineId(11619);

/// Direction-naming convention of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    /// Not a recognized loop line; loop traversal does not apply.
    NotALoop,
    /// Directions are named by rotational sense (clockwise / counter-clockwise).
    Clockwise,
    /// Directions are named by nesting sense (inner / outer).
    InnerOuter,
    /// Directions are labelled with the plain list of stations ahead.
    NameList,
}

impl LoopKind {
    /// Whether loop semantics (the wraparound search) apply at all.
    ///
    /// Callers gate on this before consulting the resolver; non-loop lines
    /// take the ordinary terminus-based labelling path outside this crate.
    pub fn is_loop(self) -> bool {
        !matches!(self, LoopKind::NotALoop)
    }
}

/// Classify a line by its direction-naming convention.
///
/// Total over all ids; lines outside the known loop table are
/// [`LoopKind::NotALoop`].
pub fn classify(line: LineId) -> LoopKind {
    match line {
        MEIJO_LINE => LoopKind::Clockwise,
        YAMANOTE_LINE | OSAKA_LOOP_LINE => LoopKind::InnerOuter,
        _ => LoopKind::NotALoop,
    }
}

/// Classify a line while a train-type filter may be active.
///
/// An active filter suppresses inner/outer naming on the Osaka Loop line,
/// whose rapid services run through to ordinary termini; the label falls
/// back to the plain station-list form. Every other line keeps its native
/// convention.
pub fn classify_with_train_type(line: LineId, train_type_active: bool) -> LoopKind {
    match classify(line) {
        LoopKind::InnerOuter if train_type_active && line == OSAKA_LOOP_LINE => LoopKind::NameList,
        kind => kind,
    }
}
