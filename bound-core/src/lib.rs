//! Loop line direction resolution.
//!
//! Answers the question a rider faces on a circular line: which station
//! should the inbound / outbound choice name from where they stand? The
//! [`convention`] module decides whether a line is a recognized loop and how
//! its two directions are named; the [`resolver`] module searches the
//! station sequence, with wraparound, for the station that carries each
//! label.

pub mod convention;
pub mod domain;
pub mod resolver;
