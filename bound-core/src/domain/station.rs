//! Station records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a single station record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier shared by every record denoting the same physical stop.
///
/// A loop line revisits the rider's own stop, so one physical stop may
/// occupy several slots of the station sequence, each slot with a distinct
/// [`StationId`] but a common `GroupId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station as it appears in a line's ordered station sequence.
///
/// Records arrive pre-fetched from the station API (camelCase wire shape)
/// and are read-only here. Any further fields the API carries are opaque to
/// direction resolution and not modelled.
///
/// # Examples
///
/// ```
/// use bound_core::domain::{GroupId, Station, StationId};
///
/// let osaki = Station::new(StationId(1130224), GroupId(1130224), "Osaki");
/// let osaki_revisited = Station::new(StationId(1130230), GroupId(1130224), "Osaki");
/// assert!(osaki.same_group(&osaki_revisited));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub group_id: GroupId,
    pub name: String,
}

impl Station {
    /// Create a station record.
    pub fn new(id: StationId, group_id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            group_id,
            name: name.into(),
        }
    }

    /// Whether `other` denotes the same physical stop.
    ///
    /// Direction labels must never name the stop the rider is already at,
    /// so the resolver compares groups rather than record ids.
    pub fn same_group(&self, other: &Station) -> bool {
        self.group_id == other.group_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_group_across_distinct_records() {
        let a = Station::new(StationId(1), GroupId(100), "Osaki");
        let b = Station::new(StationId(2), GroupId(100), "Osaki");
        let c = Station::new(StationId(3), GroupId(200), "Shinagawa");

        assert!(a.same_group(&b));
        assert!(b.same_group(&a));
        assert!(!a.same_group(&c));
    }

    #[test]
    fn same_group_with_itself() {
        let a = Station::new(StationId(1), GroupId(100), "Osaki");
        assert!(a.same_group(&a));
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let station: Station =
            serde_json::from_str(r#"{"id":1130205,"groupId":1130205,"name":"Tokyo"}"#).unwrap();

        assert_eq!(station.id, StationId(1130205));
        assert_eq!(station.group_id, GroupId(1130205));
        assert_eq!(station.name, "Tokyo");
    }

    #[test]
    fn serializes_group_id_as_camel_case() {
        let station = Station::new(StationId(7), GroupId(9), "Ueno");
        let json = serde_json::to_string(&station).unwrap();

        assert!(json.contains(r#""groupId":9"#), "unexpected shape: {json}");
    }

    #[test]
    fn display_ids() {
        assert_eq!(format!("{}", StationId(42)), "42");
        assert_eq!(format!("{}", GroupId(7)), "7");
    }
}
