//! The `NetDisk` arena store.
//!
//! One flat `Vec` per entity kind; every cross-reference is an index id.
//! Construction goes through the builder methods below, which maintain the
//! back-pointers (end -> atom, atom -> chain, net -> parent) and reject
//! wiring that would break the tree invariant. After construction the
//! store is only ever read.

use std::collections::HashMap;

use cactusview_error::{Error, Result};

use crate::name::Name;
use crate::net::{
    AdjId, AdjacencyComponent, Atom, AtomId, AtomInstance, AtomInstanceId, Chain, ChainId, End,
    EndId, EndInstance, EndInstanceId, Link, Net, NetId,
};

/// Flat store for one whole nested alignment structure.
#[derive(Debug, Default)]
pub struct NetDisk {
    nets: Vec<Net>,
    ends: Vec<End>,
    atoms: Vec<Atom>,
    chains: Vec<Chain>,
    adjacency_components: Vec<AdjacencyComponent>,
    end_instances: Vec<EndInstance>,
    atom_instances: Vec<AtomInstance>,
    net_index: HashMap<Name, NetId>,
}

impl NetDisk {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a new net. Net names must be unique across the disk.
    pub fn add_net(&mut self, name: Name) -> Result<NetId> {
        if self.net_index.contains_key(&name) {
            return Err(Error::duplicate_name(name.to_string()).with_operation("disk::add_net"));
        }
        let id = NetId(self.nets.len() as u32);
        self.nets.push(Net {
            name,
            ends: Vec::new(),
            atoms: Vec::new(),
            chains: Vec::new(),
            adjacency_components: Vec::new(),
            parent: None,
        });
        self.net_index.insert(name, id);
        Ok(id)
    }

    /// Create a new end owned by `net`, initially a stub/cap end.
    pub fn add_end(&mut self, net: NetId, name: Name) -> EndId {
        let id = EndId(self.ends.len() as u32);
        self.ends.push(End {
            name,
            atom: None,
            instances: Vec::new(),
        });
        self.nets[net.index()].ends.push(id);
        id
    }

    /// Create a new atom bounded by `left` and `right`, wiring both ends'
    /// back-pointers. An end can bound at most one atom.
    pub fn add_atom(&mut self, net: NetId, name: Name, left: EndId, right: EndId) -> Result<AtomId> {
        for end in [left, right] {
            if self.ends[end.index()].atom.is_some() {
                return Err(Error::invariant_violation(format!(
                    "end '{}' already bounds an atom",
                    self.ends[end.index()].name
                ))
                .with_operation("disk::add_atom")
                .with_context("atom", name.to_string()));
            }
        }
        let id = AtomId(self.atoms.len() as u32);
        self.atoms.push(Atom {
            name,
            left_end: left,
            right_end: right,
            chain: None,
            instances: Vec::new(),
        });
        self.ends[left.index()].atom = Some(id);
        self.ends[right.index()].atom = Some(id);
        self.nets[net.index()].atoms.push(id);
        Ok(id)
    }

    /// Create a new, empty chain in `net`.
    pub fn add_chain(&mut self, net: NetId, name: Name) -> ChainId {
        let id = ChainId(self.chains.len() as u32);
        self.chains.push(Chain {
            name,
            links: Vec::new(),
        });
        self.nets[net.index()].chains.push(id);
        id
    }

    /// Append a link to `chain`, anchored at `left`. If the left end bounds
    /// an atom, that atom becomes part of the chain.
    pub fn append_link(&mut self, chain: ChainId, left: EndId) -> Result<()> {
        self.chains[chain.index()].links.push(Link { left });
        if let Some(atom) = self.ends[left.index()].atom {
            let slot = &mut self.atoms[atom.index()].chain;
            if slot.is_some_and(|c| c != chain) {
                return Err(Error::invariant_violation(format!(
                    "atom '{}' threaded by two chains",
                    self.atoms[atom.index()].name
                ))
                .with_operation("disk::append_link"));
            }
            *slot = Some(chain);
        }
        Ok(())
    }

    /// Connect `nested` below `parent` through a new adjacency component.
    ///
    /// Rejects re-parenting and any wiring that would put `nested` on its
    /// own ancestor path, keeping the net tree a tree.
    pub fn add_adjacency_component(&mut self, parent: NetId, nested: NetId) -> Result<AdjId> {
        if self.nets[nested.index()].parent.is_some() {
            return Err(Error::invariant_violation(format!(
                "net '{}' already has a parent",
                self.nets[nested.index()].name
            ))
            .with_operation("disk::add_adjacency_component"));
        }
        let mut cursor = Some(parent);
        while let Some(net) = cursor {
            if net == nested {
                return Err(Error::invariant_violation(format!(
                    "nesting net '{}' under itself",
                    self.nets[nested.index()].name
                ))
                .with_operation("disk::add_adjacency_component"));
            }
            cursor = self.nets[net.index()]
                .parent
                .map(|adj| self.adjacency_components[adj.index()].parent);
        }

        let id = AdjId(self.adjacency_components.len() as u32);
        self.adjacency_components
            .push(AdjacencyComponent { parent, nested });
        self.nets[parent.index()].adjacency_components.push(id);
        self.nets[nested.index()].parent = Some(id);
        Ok(id)
    }

    /// Create a new, unpaired instance of `end`.
    pub fn add_end_instance(&mut self, end: EndId) -> EndInstanceId {
        let id = EndInstanceId(self.end_instances.len() as u32);
        self.end_instances.push(EndInstance {
            end,
            adjacency: None,
        });
        self.ends[end.index()].instances.push(id);
        id
    }

    /// Pair two end instances as adjacency partners of each other.
    pub fn pair_adjacency(&mut self, a: EndInstanceId, b: EndInstanceId) -> Result<()> {
        for inst in [a, b] {
            if self.end_instances[inst.index()].adjacency.is_some() {
                return Err(Error::invariant_violation(
                    "end instance already paired",
                )
                .with_operation("disk::pair_adjacency")
                .with_context("end", self.end_name(self.end_instances[inst.index()].end).to_string()));
            }
        }
        self.end_instances[a.index()].adjacency = Some(b);
        self.end_instances[b.index()].adjacency = Some(a);
        Ok(())
    }

    /// Create a new instance of `atom`.
    pub fn add_atom_instance(&mut self, atom: AtomId) -> AtomInstanceId {
        let id = AtomInstanceId(self.atom_instances.len() as u32);
        self.atom_instances.push(AtomInstance { atom });
        self.atoms[atom.index()].instances.push(id);
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id.index()]
    }

    pub fn end(&self, id: EndId) -> &End {
        &self.ends[id.index()]
    }

    pub fn atom(&self, id: AtomId) -> &Atom {
        &self.atoms[id.index()]
    }

    pub fn chain(&self, id: ChainId) -> &Chain {
        &self.chains[id.index()]
    }

    pub fn adjacency_component(&self, id: AdjId) -> &AdjacencyComponent {
        &self.adjacency_components[id.index()]
    }

    pub fn end_instance(&self, id: EndInstanceId) -> &EndInstance {
        &self.end_instances[id.index()]
    }

    pub fn atom_instance(&self, id: AtomInstanceId) -> &AtomInstance {
        &self.atom_instances[id.index()]
    }

    pub fn end_name(&self, id: EndId) -> Name {
        self.ends[id.index()].name
    }

    /// Look up a net by its globally unique name.
    pub fn net_by_name(&self, name: Name) -> Option<NetId> {
        self.net_index.get(&name).copied()
    }

    /// Find the single parentless net of the tree.
    ///
    /// An empty disk or one with several parentless nets is not a
    /// renderable structure and is reported as such.
    pub fn root_net(&self) -> Result<NetId> {
        let mut roots = self
            .nets
            .iter()
            .enumerate()
            .filter(|(_, net)| net.parent.is_none())
            .map(|(i, _)| NetId(i as u32));

        let root = roots.next().ok_or_else(|| {
            Error::invariant_violation("disk holds no nets").with_operation("disk::root_net")
        })?;
        if let Some(other) = roots.next() {
            return Err(Error::invariant_violation(format!(
                "multiple root nets: '{}' and '{}'",
                self.nets[root.index()].name,
                self.nets[other.index()].name
            ))
            .with_operation("disk::root_net"));
        }
        Ok(root)
    }

    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    pub fn end_count(&self) -> usize {
        self.ends.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }
}
