//! Entity types of the nested alignment structure.
//!
//! All cross-references between entities are index ids into the owning
//! [`NetDisk`](crate::disk::NetDisk); entities never hold pointers to each
//! other, which keeps the tree trivially acyclic to borrow-check and lets
//! the store be a handful of flat `Vec`s.

use crate::name::Name;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Index of a [`Net`] in the disk store.
    NetId
);
define_id!(
    /// Index of an [`End`] in the disk store.
    EndId
);
define_id!(
    /// Index of an [`Atom`] in the disk store.
    AtomId
);
define_id!(
    /// Index of a [`Chain`] in the disk store.
    ChainId
);
define_id!(
    /// Index of an [`AdjacencyComponent`] in the disk store.
    AdjId
);
define_id!(
    /// Index of an [`EndInstance`] in the disk store.
    EndInstanceId
);
define_id!(
    /// Index of an [`AtomInstance`] in the disk store.
    AtomInstanceId
);

/// A net: one node of the nested alignment tree.
///
/// A net owns ends, atoms, and chains directly, and reaches nested nets
/// through its adjacency components. The parent link is `None` exactly at
/// the tree root.
#[derive(Debug)]
pub struct Net {
    pub(crate) name: Name,
    pub(crate) ends: Vec<EndId>,
    pub(crate) atoms: Vec<AtomId>,
    pub(crate) chains: Vec<ChainId>,
    pub(crate) adjacency_components: Vec<AdjId>,
    pub(crate) parent: Option<AdjId>,
}

impl Net {
    pub fn name(&self) -> Name {
        self.name
    }

    pub fn ends(&self) -> &[EndId] {
        &self.ends
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }

    pub fn adjacency_components(&self) -> &[AdjId] {
        &self.adjacency_components
    }

    /// The adjacency component connecting this net to its parent, if any.
    pub fn parent(&self) -> Option<AdjId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A net with no adjacency components has no nested nets below it.
    pub fn is_leaf(&self) -> bool {
        self.adjacency_components.is_empty()
    }
}

/// An end: a named boundary point, optionally bounding an atom.
///
/// Ends with no owning atom are stub/cap ends; they mark where sequence
/// enters or leaves the structure.
#[derive(Debug)]
pub struct End {
    pub(crate) name: Name,
    pub(crate) atom: Option<AtomId>,
    pub(crate) instances: Vec<EndInstanceId>,
}

impl End {
    pub fn name(&self) -> Name {
        self.name
    }

    /// The atom this end bounds, or `None` for a stub/cap end.
    pub fn atom(&self) -> Option<AtomId> {
        self.atom
    }

    pub fn is_atom_end(&self) -> bool {
        self.atom.is_some()
    }

    pub fn instances(&self) -> &[EndInstanceId] {
        &self.instances
    }
}

/// An atom: a two-ended aligned segment.
#[derive(Debug)]
pub struct Atom {
    pub(crate) name: Name,
    pub(crate) left_end: EndId,
    pub(crate) right_end: EndId,
    pub(crate) chain: Option<ChainId>,
    pub(crate) instances: Vec<AtomInstanceId>,
}

impl Atom {
    pub fn name(&self) -> Name {
        self.name
    }

    pub fn left_end(&self) -> EndId {
        self.left_end
    }

    pub fn right_end(&self) -> EndId {
        self.right_end
    }

    /// The chain threading this atom, or `None` for a trivial atom.
    pub fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    pub fn instances(&self) -> &[AtomInstanceId] {
        &self.instances
    }
}

/// One position within a chain, anchored by its left end.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub(crate) left: EndId,
}

impl Link {
    pub fn left(&self) -> EndId {
        self.left
    }
}

/// A chain: an ordered run of links threading atoms together.
///
/// Links are 1-indexed in traversal order; position 0 is the structural
/// entry of the chain and is never itself drawn as an atom.
#[derive(Debug)]
pub struct Chain {
    pub(crate) name: Name,
    pub(crate) links: Vec<Link>,
}

impl Chain {
    pub fn name(&self) -> Name {
        self.name
    }

    pub fn length(&self) -> usize {
        self.links.len()
    }

    pub fn link(&self, position: usize) -> Option<&Link> {
        self.links.get(position)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// An adjacency component: the edge from a parent net to one nested net.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyComponent {
    pub(crate) parent: NetId,
    pub(crate) nested: NetId,
}

impl AdjacencyComponent {
    pub fn parent_net(&self) -> NetId {
        self.parent
    }

    pub fn nested_net(&self) -> NetId {
        self.nested
    }
}

/// A concrete occurrence of an end in the underlying alignment.
///
/// Well-formed input pairs every end instance with exactly one partner
/// instance (possibly in a different end); a missing partner is a
/// structural-integrity violation surfaced at render time.
#[derive(Debug)]
pub struct EndInstance {
    pub(crate) end: EndId,
    pub(crate) adjacency: Option<EndInstanceId>,
}

impl EndInstance {
    pub fn end(&self) -> EndId {
        self.end
    }

    pub fn adjacency(&self) -> Option<EndInstanceId> {
        self.adjacency
    }
}

/// A concrete occurrence of an atom in the underlying alignment.
#[derive(Debug)]
pub struct AtomInstance {
    pub(crate) atom: AtomId,
}

impl AtomInstance {
    pub fn atom(&self) -> AtomId {
        self.atom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_is_plain_index() {
        assert_eq!(NetId(3).to_string(), "3");
        assert_eq!(EndId(0).to_string(), "0");
    }

    #[test]
    fn chain_link_lookup() {
        let chain = Chain {
            name: Name::new(1),
            links: vec![Link { left: EndId(0) }, Link { left: EndId(1) }],
        };
        assert_eq!(chain.length(), 2);
        assert_eq!(chain.link(1).unwrap().left(), EndId(1));
        assert!(chain.link(2).is_none());
    }
}
