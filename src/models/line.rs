use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::LineResult;
use super::section::Section;
use super::section_chain::{Additions, Removals, SectionChain, Traversal};
use super::station::Station;

/// A subway line: identity and display data plus the chain of sections
/// that makes up its path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub color: String,
    sections: SectionChain,
}

impl Line {
    /// Create a line from its first section. A line always has at least
    /// one section, so the terminals are fixed from the start.
    pub fn new(
        name: String,
        color: String,
        up_station: Station,
        down_station: Station,
        distance: u32,
    ) -> LineResult<Self> {
        let mut sections = SectionChain::new();
        sections.add_section(Section::new(up_station, down_station, distance)?)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            color,
            sections,
        })
    }

    pub fn add_section(&mut self, section: Section) -> LineResult<Section> {
        self.sections.add_section(section)
    }

    pub fn remove_station(&mut self, station: &Station) -> LineResult<()> {
        self.sections.remove_station(station)
    }

    /// Every station on the line, in path order.
    #[must_use]
    pub fn stations(&self) -> Vec<Station> {
        self.sections.ordered_stations()
    }

    /// Every section on the line, in no particular order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.sections.sections()
    }

    #[must_use]
    pub fn end_up_station(&self) -> Option<Station> {
        self.sections.end_up_station()
    }

    #[must_use]
    pub fn end_down_station(&self) -> Option<Station> {
        self.sections.end_down_station()
    }

    /// Update display data; the section chain is untouched.
    pub fn update(&mut self, name: String, color: String) {
        self.name = name;
        self.color = color;
    }
}
