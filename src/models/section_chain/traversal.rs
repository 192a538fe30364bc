use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::SectionChain;
use crate::models::section::Section;
use crate::models::station::Station;

/// Extension trait for reading a [`SectionChain`] as an ordered path.
pub trait Traversal {
    /// The section at the head of the line: nothing arrives at its up
    /// station. `None` on an empty chain.
    fn end_up_section(&self) -> Option<Section>;

    /// The section at the tail of the line: nothing leaves its down
    /// station. `None` on an empty chain.
    fn end_down_section(&self) -> Option<Section>;

    fn end_up_station(&self) -> Option<Station>;

    fn end_down_station(&self) -> Option<Station>;

    /// Every station on the line, head terminal to tail terminal.
    fn ordered_stations(&self) -> Vec<Station>;
}

impl Traversal for SectionChain {
    fn end_up_section(&self) -> Option<Section> {
        let head = self.terminal_node(Direction::Incoming)?;
        let edge = self.graph.edges_directed(head, Direction::Outgoing).next()?;
        self.assemble(edge.source(), edge.target(), edge.weight().distance)
    }

    fn end_down_section(&self) -> Option<Section> {
        let tail = self.terminal_node(Direction::Outgoing)?;
        let edge = self.graph.edges_directed(tail, Direction::Incoming).next()?;
        self.assemble(edge.source(), edge.target(), edge.weight().distance)
    }

    fn end_up_station(&self) -> Option<Station> {
        self.end_up_section().map(|s| s.up_station().clone())
    }

    fn end_down_station(&self) -> Option<Station> {
        self.end_down_section().map(|s| s.down_station().clone())
    }

    fn ordered_stations(&self) -> Vec<Station> {
        let Some(first) = self.end_up_section() else {
            return Vec::new();
        };

        let mut stations = vec![first.up_station().clone(), first.down_station().clone()];
        let mut cursor = first;
        // One hop per remaining section; a longer walk would mean the
        // chain is no longer a single path.
        for _ in 1..self.section_count() {
            let Some(next) = self.section_leaving(cursor.down_station()) else {
                break;
            };
            stations.push(next.down_station().clone());
            cursor = next;
        }

        debug_assert_eq!(
            stations.len(),
            self.section_count() + 1,
            "section chain is not a single path"
        );
        stations
    }
}

impl SectionChain {
    /// The unique station missing an edge in `missing`: the head terminal
    /// for `Incoming`, the tail terminal for `Outgoing`.
    fn terminal_node(&self, missing: Direction) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&node| self.graph.edges_directed(node, missing).next().is_none())
    }
}
