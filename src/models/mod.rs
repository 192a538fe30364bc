mod error;
mod line;
mod section;
mod section_chain;
mod station;

pub use error::{LineError, LineResult};
pub use line::Line;
pub use section::Section;
pub use section_chain::{Additions, Removals, SectionChain, Traversal};
pub use station::Station;
