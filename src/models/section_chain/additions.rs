use log::debug;

use super::traversal::Traversal;
use super::SectionChain;
use crate::models::error::{LineError, LineResult};
use crate::models::section::Section;

/// Extension trait for growing a [`SectionChain`].
pub trait Additions {
    /// Register a new section on the line.
    ///
    /// The first section is accepted unconditionally. After that the new
    /// section must either extend the line past one of its terminals or
    /// split an existing section at an interior point. Validation runs in
    /// a fixed order: duplicate edge, end extension, interior split; the
    /// reported error for an ambiguous input follows from that order.
    fn add_section(&mut self, section: Section) -> LineResult<Section>;
}

impl Additions for SectionChain {
    fn add_section(&mut self, section: Section) -> LineResult<Section> {
        if self.is_empty() {
            self.insert_section(&section);
            debug!(
                "opened line with section {} -> {}",
                section.up_station().name,
                section.down_station().name
            );
            return Ok(section);
        }

        // A duplicate would have to leave the same station the new section does.
        if let Some(existing) = self.section_leaving(section.up_station()) {
            if existing.has_same_endpoints(&section) {
                return Err(LineError::DuplicateSection);
            }
        }

        let (Some(end_up), Some(end_down)) = (self.end_up_section(), self.end_down_section())
        else {
            debug_assert!(false, "non-empty chain without terminal sections");
            return Err(LineError::DisconnectedSection);
        };

        if section.is_previous(&end_up) {
            return self.extend_at_terminal(section, true);
        }
        if section.is_next(&end_down) {
            return self.extend_at_terminal(section, false);
        }

        self.split_host_section(section)
    }
}

impl SectionChain {
    /// End addition: hook the new section onto a terminal. The endpoint
    /// that becomes the new terminal must not already be on the line,
    /// otherwise the path would close into a cycle.
    fn extend_at_terminal(&mut self, section: Section, at_head: bool) -> LineResult<Section> {
        let fresh_terminal = if at_head {
            section.up_station()
        } else {
            section.down_station()
        };
        if self.contains(fresh_terminal) {
            return Err(LineError::StationAlreadyOnLine);
        }

        self.insert_section(&section);
        debug!(
            "extended line at the {} with section {} -> {}",
            if at_head { "head" } else { "tail" },
            section.up_station().name,
            section.down_station().name
        );
        Ok(section)
    }

    /// Middle addition: carve the new section out of the one existing
    /// section that shares an endpoint with it, replacing that host edge
    /// with the new section and the remainder.
    fn split_host_section(&mut self, section: Section) -> LineResult<Section> {
        // At most one host of each kind exists; the up-station match wins.
        let host = self
            .section_leaving(section.up_station())
            .or_else(|| self.section_entering(section.down_station()))
            .ok_or(LineError::DisconnectedSection)?;

        if section.is_at_least_as_long_as(&host) {
            return Err(LineError::DistanceTooLarge {
                new: section.distance(),
                existing: host.distance(),
            });
        }

        let Some(remainder) = host.split_remainder(&section) else {
            debug_assert!(false, "host shares no endpoint with the new section");
            return Err(LineError::DisconnectedSection);
        };

        // The endpoint not shared with the host becomes a middle station
        // and must be new to the line.
        let middle = if host.same_up_station(&section) {
            section.down_station()
        } else {
            section.up_station()
        };
        if self.contains(middle) {
            return Err(LineError::StationAlreadyOnLine);
        }

        self.remove_section_between(host.up_station(), host.down_station());
        self.insert_section(&section);
        self.insert_section(&remainder);
        debug!(
            "split section {} -> {} around new station {}",
            host.up_station().name,
            host.down_station().name,
            middle.name
        );
        Ok(section)
    }
}
