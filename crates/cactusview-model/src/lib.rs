//! # cactusview-model
//!
//! The nested cactus-graph alignment model: nets holding ends, atoms,
//! chains, and adjacency components, with concrete sequence occurrences
//! attached as instances.
//!
//! The whole structure lives in a [`NetDisk`] - a flat arena store with
//! one `Vec` per entity kind and `u32` index ids for every
//! cross-reference. Nets form a tree: each net is reachable from exactly
//! one root by following adjacency components, and construction rejects
//! re-parenting and cycles, so consumers can recurse without visited-set
//! bookkeeping.
//!
//! The store is built once (by the disk-format loader or by tests) and is
//! read-only afterwards; rendering never mutates it.
//!
//! # Module Structure
//!
//! - [`name`]: globally unique entity names and their canonical string form
//! - [`net`]: entity types and id newtypes
//! - [`disk`]: the [`NetDisk`] arena store - construction and queries
//! - [`format`]: the serde-backed on-disk document and loader

pub mod disk;
pub mod format;
pub mod name;
pub mod net;

pub use cactusview_error::{Error, ErrorKind, Result};

pub use disk::NetDisk;
pub use name::Name;
pub use net::{
    AdjId, AdjacencyComponent, Atom, AtomId, AtomInstance, AtomInstanceId, Chain, ChainId, End,
    EndId, EndInstance, EndInstanceId, Link, Net, NetId,
};
