//! The recursive traversal that flattens a net tree into DOT declarations.
//!
//! One pre-order pass over the net tree. Per net, in order: stub/cap end
//! nodes (traversal root only), trivial atoms, chained atoms, adjacency
//! edges (leaf nets only), then recursion into each nested net. The
//! ordering is fully determined by the store's enumeration order, so the
//! same disk always produces a byte-identical stream.

use std::io::Write;

use tracing::debug;

use cactusview_error::{Error, Result};
use cactusview_model::{AtomId, EndId, NetDisk, NetId};

use crate::dot::{DotWriter, chain_colour};

const END_NODE_SIZE: f64 = 0.5;
const END_NODE_SHAPE: &str = "circle";
const END_NODE_COLOUR: &str = "black";
const END_NODE_FONT_SIZE: u32 = 14;

const TRIVIAL_ATOM_COLOUR: &str = "black";
const ATOM_EDGE_LENGTH: f64 = 5.0;
const ATOM_EDGE_WEIGHT: f64 = 10.0;

const ADJACENCY_COLOUR: &str = "grey";
const ADJACENCY_EDGE_LENGTH: f64 = 10.0;
const ADJACENCY_EDGE_WEIGHT: f64 = 1.0;

const EDGE_DIR: &str = "forward";

/// Options for graph rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// If true, end nodes carry their name as a visible label.
    /// If false (default), labels are empty and only node identity remains.
    pub name_labels: bool,
}

/// Render the net tree rooted at `root` into `out` as one DOT document.
///
/// The writer is opened before the first net and closed after the last;
/// any structural-integrity failure or sink I/O failure aborts the whole
/// render.
pub fn render_graph<W: Write>(
    disk: &NetDisk,
    root: NetId,
    out: W,
    options: &RenderOptions,
) -> Result<W> {
    let mut renderer = NetRenderer {
        disk,
        options,
        writer: DotWriter::new(out),
        chains_seen: 0,
    };
    renderer.writer.open()?;
    renderer.render_net(root)?;
    renderer.writer.close()?;
    Ok(renderer.writer.into_inner())
}

/// Render into an in-memory string. Convenience for stdout output and tests.
pub fn render_to_string(disk: &NetDisk, root: NetId, options: &RenderOptions) -> Result<String> {
    let bytes = render_graph(disk, root, Vec::new(), options)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::unexpected("render produced invalid UTF-8").set_source(e))
}

struct NetRenderer<'a, W: Write> {
    disk: &'a NetDisk,
    options: &'a RenderOptions,
    writer: DotWriter<W>,
    /// Chains emitted so far, across the whole tree. Keys the palette.
    chains_seen: usize,
}

impl<W: Write> NetRenderer<'_, W> {
    fn render_net(&mut self, net: NetId) -> Result<()> {
        let disk = self.disk;
        debug!(net = %disk.net(net).name(), "rendering net");

        // Stub/cap ends belong to the top level alone; nested nets inherit
        // them through their boundary ends and must not re-declare them.
        if disk.net(net).is_root() {
            self.emit_stub_and_cap_ends(net)?;
        }
        self.emit_trivial_atoms(net)?;
        self.emit_chains(net)?;
        // Adjacencies are physical connections and only meaningful at the
        // finest granularity; non-leaf nets delegate them downward.
        if disk.net(net).is_leaf() {
            self.emit_adjacencies(net)?;
        }
        for &adj in disk.net(net).adjacency_components() {
            self.render_net(disk.adjacency_component(adj).nested_net())?;
        }
        Ok(())
    }

    /// One node per end with no owning atom.
    fn emit_stub_and_cap_ends(&mut self, net: NetId) -> Result<()> {
        let disk = self.disk;
        for &end in disk.net(net).ends() {
            if !disk.end(end).is_atom_end() {
                self.emit_end_node(end)?;
            }
        }
        Ok(())
    }

    /// Atoms not threaded by any chain, drawn black.
    fn emit_trivial_atoms(&mut self, net: NetId) -> Result<()> {
        let disk = self.disk;
        for &atom in disk.net(net).atoms() {
            if disk.atom(atom).chain().is_none() {
                self.emit_atom(atom, TRIVIAL_ATOM_COLOUR)?;
            }
        }
        Ok(())
    }

    /// Atoms threaded by chains, one colour per chain.
    ///
    /// Link position 0 is never visited; a chain of length L draws L-1
    /// atoms. Kept for output parity with the reference behaviour.
    fn emit_chains(&mut self, net: NetId) -> Result<()> {
        let disk = self.disk;
        for &chain_id in disk.net(net).chains() {
            let colour = chain_colour(self.chains_seen);
            self.chains_seen += 1;
            let chain = disk.chain(chain_id);
            for (position, link) in chain.links().iter().enumerate().skip(1) {
                let atom = disk.end(link.left()).atom().ok_or_else(|| {
                    Error::unlinked_atom(disk.end_name(link.left()).to_string())
                        .with_operation("render::chains")
                        .with_context("net", disk.net(net).name().to_string())
                        .with_context("chain", chain.name().to_string())
                        .with_context("position", position.to_string())
                })?;
                self.emit_atom(atom, colour)?;
            }
        }
        Ok(())
    }

    /// One grey edge per end instance, pointing at its partner's end.
    ///
    /// Each pairing is reached from both sides, so it is drawn twice; the
    /// doubling is part of the reference output.
    fn emit_adjacencies(&mut self, net: NetId) -> Result<()> {
        let disk = self.disk;
        for &end in disk.net(net).ends() {
            for &inst in disk.end(end).instances() {
                let partner = disk.end_instance(inst).adjacency().ok_or_else(|| {
                    Error::missing_adjacency(disk.end_name(end).to_string())
                        .with_operation("render::adjacencies")
                        .with_context("net", disk.net(net).name().to_string())
                })?;
                let partner_end = disk.end_instance(partner).end();
                self.writer.edge(
                    &disk.end_name(end).to_string(),
                    &disk.end_name(partner_end).to_string(),
                    "",
                    ADJACENCY_COLOUR,
                    ADJACENCY_EDGE_LENGTH,
                    ADJACENCY_EDGE_WEIGHT,
                    EDGE_DIR,
                )?;
            }
        }
        Ok(())
    }

    /// Both end nodes of the atom, then one edge per concrete instance.
    fn emit_atom(&mut self, atom: AtomId, colour: &str) -> Result<()> {
        let disk = self.disk;
        let left = disk.atom(atom).left_end();
        let right = disk.atom(atom).right_end();
        self.emit_end_node(left)?;
        self.emit_end_node(right)?;

        let from = disk.end_name(left).to_string();
        let to = disk.end_name(right).to_string();
        for _ in disk.atom(atom).instances() {
            self.writer.edge(
                &from,
                &to,
                "",
                colour,
                ATOM_EDGE_LENGTH,
                ATOM_EDGE_WEIGHT,
                EDGE_DIR,
            )?;
        }
        Ok(())
    }

    fn emit_end_node(&mut self, end: EndId) -> Result<()> {
        let id = self.disk.end_name(end).to_string();
        let label = if self.options.name_labels { id.as_str() } else { "" };
        self.writer.node(
            &id,
            label,
            END_NODE_SIZE,
            END_NODE_SIZE,
            END_NODE_SHAPE,
            END_NODE_COLOUR,
            END_NODE_FONT_SIZE,
        )
    }
}
