use serde::{Deserialize, Serialize};

use super::error::{LineError, LineResult};
use super::station::Station;

/// One leg of a line: a directed edge from `up_station` to `down_station`
/// with a positive distance. Sections are not traversable in reverse; the
/// direction is part of their identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: u32,
}

impl Section {
    pub fn new(up_station: Station, down_station: Station, distance: u32) -> LineResult<Self> {
        if up_station == down_station {
            return Err(LineError::IdenticalEndpoints);
        }
        if distance == 0 {
            return Err(LineError::ZeroDistance);
        }
        Ok(Self {
            up_station,
            down_station,
            distance,
        })
    }

    /// Build a section from parts already known to satisfy the constructor
    /// checks. Edges read back out of a chain are validated on insertion.
    pub(crate) fn from_parts(up_station: Station, down_station: Station, distance: u32) -> Self {
        debug_assert!(distance > 0);
        debug_assert!(up_station != down_station);
        Self {
            up_station,
            down_station,
            distance,
        }
    }

    #[must_use]
    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    #[must_use]
    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// True if this section comes directly before `other` on a line.
    #[must_use]
    pub fn is_previous(&self, other: &Section) -> bool {
        self.down_station == other.up_station
    }

    /// True if this section comes directly after `other` on a line.
    #[must_use]
    pub fn is_next(&self, other: &Section) -> bool {
        self.up_station == other.down_station
    }

    #[must_use]
    pub fn same_up_station(&self, other: &Section) -> bool {
        self.up_station == other.up_station
    }

    #[must_use]
    pub fn same_down_station(&self, other: &Section) -> bool {
        self.down_station == other.down_station
    }

    /// True if both endpoints match in the same direction. Against a
    /// section already on a line this marks `other` as a duplicate edge.
    #[must_use]
    pub fn has_same_endpoints(&self, other: &Section) -> bool {
        self.same_up_station(other) && self.same_down_station(other)
    }

    #[must_use]
    pub fn is_at_least_as_long_as(&self, other: &Section) -> bool {
        self.distance >= other.distance
    }

    /// The leftover edge once `carved` is cut out of this section.
    ///
    /// `carved` must share exactly one endpoint with this section and be
    /// strictly shorter; callers check the length before carving. Returns
    /// `None` when no endpoint is shared.
    #[must_use]
    pub fn split_remainder(&self, carved: &Section) -> Option<Section> {
        if self.same_up_station(carved) {
            return Some(Section::from_parts(
                carved.down_station.clone(),
                self.down_station.clone(),
                self.distance - carved.distance,
            ));
        }
        if self.same_down_station(carved) {
            return Some(Section::from_parts(
                self.up_station.clone(),
                carved.up_station.clone(),
                self.distance - carved.distance,
            ));
        }
        None
    }
}
