use log::debug;

use super::SectionChain;
use crate::models::error::{LineError, LineResult};
use crate::models::section::Section;
use crate::models::station::Station;

/// Extension trait for shrinking a [`SectionChain`].
pub trait Removals {
    /// Take `station` off the line and close the gap it leaves.
    ///
    /// Removing a terminal drops its only section; removing a middle
    /// station replaces its two sections with one merged section whose
    /// distance is their sum. A line never shrinks below one section.
    fn remove_station(&mut self, station: &Station) -> LineResult<()>;
}

impl Removals for SectionChain {
    fn remove_station(&mut self, station: &Station) -> LineResult<()> {
        if self.section_count() == 1 {
            return Err(LineError::LastSection);
        }
        let Some(index) = self.node_of(station) else {
            return Err(LineError::StationNotOnLine);
        };

        let entering = self.section_entering(station);
        let leaving = self.section_leaving(station);

        match (entering, leaving) {
            (Some(before), Some(after)) => {
                let merged = Section::from_parts(
                    before.up_station().clone(),
                    after.down_station().clone(),
                    before.distance() + after.distance(),
                );
                // Dropping the node takes both adjacent sections with it.
                self.release_station(index);
                self.insert_section(&merged);
                debug!(
                    "removed middle station {}, bridged {} -> {} ({})",
                    station.name,
                    merged.up_station().name,
                    merged.down_station().name,
                    merged.distance()
                );
            }
            (Some(_), None) | (None, Some(_)) => {
                self.release_station(index);
                debug!("removed terminal station {}", station.name);
            }
            (None, None) => {
                debug_assert!(false, "indexed station with no sections");
                return Err(LineError::StationNotOnLine);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::additions::Additions;
    use super::super::traversal::Traversal;
    use super::*;

    fn station(name: &str) -> Station {
        Station::new(name.to_string())
    }

    fn section(up: &Station, down: &Station, distance: u32) -> Section {
        Section::new(up.clone(), down.clone(), distance).expect("valid section")
    }

    fn names(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.name.as_str()).collect()
    }

    /// A -(10)- B -(10)- C
    fn three_station_chain() -> (SectionChain, Station, Station, Station) {
        let (a, b, c) = (station("A"), station("B"), station("C"));
        let mut chain = SectionChain::new();
        chain.add_section(section(&a, &b, 10)).expect("first section");
        chain.add_section(section(&b, &c, 10)).expect("tail extension");
        (chain, a, b, c)
    }

    #[test]
    fn test_remove_middle_station_merges_sections() {
        let (mut chain, a, b, c) = three_station_chain();

        chain.remove_station(&b).expect("middle removal");

        assert_eq!(chain.section_count(), 1);
        assert_eq!(chain.sections(), vec![section(&a, &c, 20)]);
        assert!(!chain.contains(&b));
    }

    #[test]
    fn test_remove_head_terminal() {
        let (mut chain, a, _, _) = three_station_chain();

        chain.remove_station(&a).expect("head removal");

        assert_eq!(names(&chain.ordered_stations()), vec!["B", "C"]);
    }

    #[test]
    fn test_remove_tail_terminal() {
        let (mut chain, _, _, c) = three_station_chain();

        chain.remove_station(&c).expect("tail removal");

        assert_eq!(names(&chain.ordered_stations()), vec!["A", "B"]);
    }

    #[test]
    fn test_rejects_removal_from_single_section_chain() {
        let (a, b) = (station("A"), station("B"));
        let mut chain = SectionChain::new();
        chain.add_section(section(&a, &b, 10)).expect("first section");

        assert_eq!(chain.remove_station(&b), Err(LineError::LastSection));
        // The guard fires before membership is even looked at.
        assert_eq!(
            chain.remove_station(&station("D")),
            Err(LineError::LastSection)
        );
        assert_eq!(chain.section_count(), 1);
    }

    #[test]
    fn test_rejects_unknown_station() {
        let (mut chain, ..) = three_station_chain();

        let result = chain.remove_station(&station("D"));

        assert_eq!(result, Err(LineError::StationNotOnLine));
        assert_eq!(names(&chain.ordered_stations()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rejects_removal_from_empty_chain() {
        let mut chain = SectionChain::new();

        let result = chain.remove_station(&station("A"));

        assert_eq!(result, Err(LineError::StationNotOnLine));
    }

    #[test]
    fn test_removal_then_reinsertion_restores_path() {
        let (mut chain, a, b, _c) = three_station_chain();

        chain.remove_station(&b).expect("middle removal");
        chain.add_section(section(&a, &b, 7)).expect("middle split");

        assert_eq!(names(&chain.ordered_stations()), vec!["A", "B", "C"]);
        let total: u32 = chain.sections().iter().map(Section::distance).sum();
        assert_eq!(total, 20);
    }
}
