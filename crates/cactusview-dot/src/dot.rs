//! DOT format utilities and the declaration writer.

use std::io::Write;

use cactusview_error::{Error, Result};

/// Named colours cycled through when assigning one colour per chain.
const CHAIN_PALETTE: [&str; 10] = [
    "red",
    "blue",
    "green",
    "yellow",
    "cyan",
    "magenta",
    "orange",
    "purple",
    "brown",
    "palegreen",
];

/// Colour for a chain by its ordinal in traversal order.
///
/// Stable within a run (and across runs on the same input, since the
/// ordinal follows the deterministic traversal); distinct until the
/// palette wraps.
pub fn chain_colour(ordinal: usize) -> &'static str {
    CHAIN_PALETTE[ordinal % CHAIN_PALETTE.len()]
}

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Writer for a single DOT graph stream.
///
/// `open` and `close` bracket the whole document; every node and edge
/// declaration is one line appended in call order. The writer never
/// deduplicates: repeated node declarations with the same id are
/// idempotent at the DOT level, and repeated edges are wanted (edge
/// multiplicity conveys instance multiplicity).
pub struct DotWriter<W: Write> {
    out: W,
}

impl<W: Write> DotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the digraph preamble.
    pub fn open(&mut self) -> Result<()> {
        writeln!(self.out, "digraph cactus {{")
            .and_then(|_| writeln!(self.out, "  graph [overlap=false];"))
            .map_err(|e| Error::from(e).with_operation("dot::open"))
    }

    /// Declare a node.
    #[allow(clippy::too_many_arguments)]
    pub fn node(
        &mut self,
        id: &str,
        label: &str,
        width: f64,
        height: f64,
        shape: &str,
        colour: &str,
        font_size: u32,
    ) -> Result<()> {
        writeln!(
            self.out,
            "  \"{}\" [label=\"{}\", width={}, height={}, shape={}, color={}, fontsize={}];",
            id,
            escape_label(label),
            width,
            height,
            shape,
            colour,
            font_size
        )
        .map_err(|e| Error::from(e).with_operation("dot::node").with_context("id", id))
    }

    /// Declare an edge.
    #[allow(clippy::too_many_arguments)]
    pub fn edge(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        colour: &str,
        length: f64,
        weight: f64,
        dir: &str,
    ) -> Result<()> {
        writeln!(
            self.out,
            "  \"{}\" -> \"{}\" [label=\"{}\", color={}, len={}, weight={}, dir={}];",
            from,
            to,
            escape_label(label),
            colour,
            length,
            weight,
            dir
        )
        .map_err(|e| {
            Error::from(e)
                .with_operation("dot::edge")
                .with_context("from", from)
                .with_context("to", to)
        })
    }

    /// Write the closing brace and flush the stream.
    pub fn close(&mut self) -> Result<()> {
        writeln!(self.out, "}}")
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::from(e).with_operation("dot::close"))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
