use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::section::Section;
use super::station::Station;

mod additions;
mod removals;
mod traversal;

pub use additions::Additions;
pub use removals::Removals;
pub use traversal::Traversal;

/// Weight of one edge in the backing graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SectionEdge {
    distance: u32,
}

/// The sections of one line, kept as a directed graph indexed by station id.
///
/// A non-empty chain always forms a single simple path: every station has
/// at most one incoming and one outgoing section, and only the two
/// terminals are missing one of them. All mutations go through
/// [`Additions`] and [`Removals`], which restore that shape before
/// returning; reads derive the ordered path through [`Traversal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionChain {
    #[serde(with = "graph_serde")]
    graph: StableDiGraph<Station, SectionEdge>,
    station_index: HashMap<Uuid, NodeIndex>,
}

impl SectionChain {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            station_index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Number of sections on the line.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `station` lies anywhere on the line.
    #[must_use]
    pub fn contains(&self, station: &Station) -> bool {
        self.station_index.contains_key(&station.id())
    }

    /// Every section on the line, in no particular order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.section_of(edge))
            .collect()
    }

    fn node_of(&self, station: &Station) -> Option<NodeIndex> {
        self.station_index.get(&station.id()).copied()
    }

    /// Add the station as a node if it is new, returning its index.
    fn intern_station(&mut self, station: &Station) -> NodeIndex {
        if let Some(&index) = self.station_index.get(&station.id()) {
            index
        } else {
            let index = self.graph.add_node(station.clone());
            self.station_index.insert(station.id(), index);
            index
        }
    }

    /// Drop a station node, its index entry, and every touching edge.
    fn release_station(&mut self, index: NodeIndex) {
        if let Some(station) = self.graph.node_weight(index) {
            self.station_index.remove(&station.id());
        }
        self.graph.remove_node(index);
    }

    /// Record `section` as an edge, interning unknown endpoints.
    fn insert_section(&mut self, section: &Section) {
        let up = self.intern_station(section.up_station());
        let down = self.intern_station(section.down_station());
        self.graph.add_edge(
            up,
            down,
            SectionEdge {
                distance: section.distance(),
            },
        );
    }

    fn remove_section_between(&mut self, up: &Station, down: &Station) {
        let (Some(from), Some(to)) = (self.node_of(up), self.node_of(down)) else {
            return;
        };
        if let Some(edge) = self.graph.find_edge(from, to) {
            self.graph.remove_edge(edge);
        }
    }

    /// The section leaving `station`, if any.
    fn section_leaving(&self, station: &Station) -> Option<Section> {
        let index = self.node_of(station)?;
        let edge = self.graph.edges_directed(index, Direction::Outgoing).next()?;
        self.assemble(edge.source(), edge.target(), edge.weight().distance)
    }

    /// The section arriving at `station`, if any.
    fn section_entering(&self, station: &Station) -> Option<Section> {
        let index = self.node_of(station)?;
        let edge = self.graph.edges_directed(index, Direction::Incoming).next()?;
        self.assemble(edge.source(), edge.target(), edge.weight().distance)
    }

    fn section_of(&self, edge: EdgeIndex) -> Option<Section> {
        let (source, target) = self.graph.edge_endpoints(edge)?;
        let distance = self.graph.edge_weight(edge)?.distance;
        self.assemble(source, target, distance)
    }

    fn assemble(&self, source: NodeIndex, target: NodeIndex, distance: u32) -> Option<Section> {
        let up = self.graph.node_weight(source)?.clone();
        let down = self.graph.node_weight(target)?.clone();
        Some(Section::from_parts(up, down, distance))
    }
}

impl Default for SectionChain {
    fn default() -> Self {
        Self::new()
    }
}

// Serialization helpers
mod graph_serde {
    use super::SectionEdge;
    use crate::models::station::Station;
    use petgraph::stable_graph::StableDiGraph;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        graph: &StableDiGraph<Station, SectionEdge>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        graph.serialize(serializer)
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<StableDiGraph<Station, SectionEdge>, D::Error>
    where
        D: Deserializer<'de>,
    {
        StableDiGraph::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str) -> Station {
        Station::new(name.to_string())
    }

    fn section(up: &Station, down: &Station, distance: u32) -> Section {
        Section::new(up.clone(), down.clone(), distance).expect("valid section")
    }

    #[test]
    fn test_new_chain_is_empty() {
        let chain = SectionChain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.section_count(), 0);
        assert_eq!(chain.sections(), Vec::new());
    }

    #[test]
    fn test_contains_tracks_both_endpoints() {
        let (a, b, c) = (station("A"), station("B"), station("C"));
        let mut chain = SectionChain::new();
        chain.add_section(section(&a, &b, 10)).expect("first section");

        assert!(chain.contains(&a));
        assert!(chain.contains(&b));
        assert!(!chain.contains(&c));
    }

    #[test]
    fn test_sections_lists_every_edge() {
        let (a, b, c) = (station("A"), station("B"), station("C"));
        let mut chain = SectionChain::new();
        chain.add_section(section(&a, &b, 10)).expect("first section");
        chain.add_section(section(&b, &c, 5)).expect("tail extension");

        let mut sections = chain.sections();
        sections.sort_by_key(Section::distance);
        assert_eq!(sections, vec![section(&b, &c, 5), section(&a, &b, 10)]);
    }

    #[test]
    fn test_serde_round_trip_preserves_path() {
        let (a, b, c) = (station("A"), station("B"), station("C"));
        let mut chain = SectionChain::new();
        chain.add_section(section(&a, &c, 10)).expect("first section");
        chain.add_section(section(&a, &b, 4)).expect("middle split");

        let json = serde_json::to_string(&chain).expect("serializable chain");
        let restored: SectionChain = serde_json::from_str(&json).expect("deserializable chain");

        assert_eq!(restored.section_count(), 2);
        assert_eq!(restored.ordered_stations(), chain.ordered_stations());
        assert_eq!(
            restored.end_down_station().map(|s| s.id()),
            Some(c.id())
        );
    }
}
