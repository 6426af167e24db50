//! Graph rendering module for producing DOT format output.
//!
//! This module flattens a nested cactus-graph structure into a single
//! stream of DOT node and edge declarations. The traversal walks the net
//! tree depth-first in pre-order and gives each structural role its own
//! visual treatment: stub/cap ends become black circles at the root only,
//! trivial atoms draw black edges, chained atoms draw edges in a
//! per-chain colour, and adjacency pairings draw grey edges at leaf nets.
//!
//! # Module Structure
//!
//! - [`dot`]: the DOT writer and format helpers
//! - [`render`]: the recursive traversal and per-entity emission rules

pub mod dot;
pub mod render;

pub use cactusview_error::{Error, ErrorKind, Result};

pub use dot::{DotWriter, chain_colour, escape_label};
pub use render::{RenderOptions, render_graph, render_to_string};
