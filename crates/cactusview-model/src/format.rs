//! The on-disk document format and loader.
//!
//! A disk document is one JSON object describing every net of the tree by
//! name. Entity references inside the document are names (plain numbers),
//! not indices; the loader resolves them into a [`NetDisk`] and rejects
//! dangling or contradictory references.
//!
//! ```json
//! {
//!   "nets": [
//!     {
//!       "name": 1,
//!       "ends": [{ "name": 10, "instances": [{ "id": 100, "adjacency": 101 }] }],
//!       "atoms": [{ "name": 20, "left": 10, "right": 11, "instances": 2 }],
//!       "chains": [{ "name": 30, "links": [10, 12] }],
//!       "nested": [2]
//!     }
//!   ]
//! }
//! ```
//!
//! An end instance may omit its `adjacency` partner; the document still
//! loads, and the missing pairing surfaces as a structural-integrity error
//! when the renderer reaches it.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use cactusview_error::{Error, ErrorKind, Result};

use crate::disk::NetDisk;
use crate::name::Name;
use crate::net::{EndId, EndInstanceId};

#[derive(Debug, Serialize, Deserialize)]
pub struct DiskDoc {
    pub nets: Vec<NetDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetDoc {
    pub name: u64,
    #[serde(default)]
    pub ends: Vec<EndDoc>,
    #[serde(default)]
    pub atoms: Vec<AtomDoc>,
    #[serde(default)]
    pub chains: Vec<ChainDoc>,
    /// Names of nets nested directly below this one.
    #[serde(default)]
    pub nested: Vec<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndDoc {
    pub name: u64,
    #[serde(default)]
    pub instances: Vec<EndInstanceDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndInstanceDoc {
    /// Document-unique id of this instance.
    pub id: u64,
    /// Id of the partner instance; both sides must name each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AtomDoc {
    pub name: u64,
    /// Name of the left end.
    pub left: u64,
    /// Name of the right end.
    pub right: u64,
    /// Number of concrete occurrences of this atom.
    #[serde(default)]
    pub instances: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainDoc {
    pub name: u64,
    /// Left-end names of the links, in chain order.
    pub links: Vec<u64>,
}

/// Read and resolve a disk document from a file.
pub fn load(path: impl AsRef<Path>) -> Result<NetDisk> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context("path", path.display().to_string()))?;
    let disk = parse(&text).map_err(|e| e.with_context("path", path.display().to_string()))?;
    info!(
        nets = disk.net_count(),
        ends = disk.end_count(),
        atoms = disk.atom_count(),
        chains = disk.chain_count(),
        "loaded disk document"
    );
    Ok(disk)
}

/// Resolve a disk document from JSON text.
pub fn parse(text: &str) -> Result<NetDisk> {
    let doc: DiskDoc = serde_json::from_str(text).map_err(|e| {
        Error::new(ErrorKind::DeserializationFailed, e.to_string())
            .with_operation("format::parse")
            .set_source(e)
    })?;
    resolve(&doc)
}

/// Resolve a parsed document into a `NetDisk`.
pub fn resolve(doc: &DiskDoc) -> Result<NetDisk> {
    let mut disk = NetDisk::new();

    // Nets first, so nested references can point forward.
    for net_doc in &doc.nets {
        disk.add_net(Name::new(net_doc.name))
            .map_err(|e| e.with_operation("format::resolve"))?;
    }

    let mut ends_by_name: HashMap<u64, EndId> = HashMap::new();
    let mut instances_by_id: HashMap<u64, EndInstanceId> = HashMap::new();
    // Declared pairings, applied after every instance exists.
    let mut declared: Vec<(u64, u64)> = Vec::new();

    for net_doc in &doc.nets {
        let net = disk
            .net_by_name(Name::new(net_doc.name))
            .ok_or_else(|| Error::net_not_found(net_doc.name.to_string()))?;

        for end_doc in &net_doc.ends {
            let end = disk.add_end(net, Name::new(end_doc.name));
            if ends_by_name.insert(end_doc.name, end).is_some() {
                return Err(Error::duplicate_name(end_doc.name.to_string())
                    .with_operation("format::resolve")
                    .with_context("net", net_doc.name.to_string()));
            }
            for inst_doc in &end_doc.instances {
                let inst = disk.add_end_instance(end);
                if instances_by_id.insert(inst_doc.id, inst).is_some() {
                    return Err(Error::duplicate_name(inst_doc.id.to_string())
                        .with_operation("format::resolve")
                        .with_context("end", end_doc.name.to_string()));
                }
                if let Some(partner) = inst_doc.adjacency {
                    declared.push((inst_doc.id, partner));
                }
            }
        }

        for atom_doc in &net_doc.atoms {
            let left = lookup_end(&ends_by_name, atom_doc.left, net_doc.name)?;
            let right = lookup_end(&ends_by_name, atom_doc.right, net_doc.name)?;
            let atom = disk
                .add_atom(net, Name::new(atom_doc.name), left, right)
                .map_err(|e| e.with_operation("format::resolve"))?;
            for _ in 0..atom_doc.instances {
                disk.add_atom_instance(atom);
            }
        }

        for chain_doc in &net_doc.chains {
            if chain_doc.links.is_empty() {
                return Err(Error::invalid_format(format!(
                    "chain '{}' has zero links",
                    chain_doc.name
                ))
                .with_operation("format::resolve")
                .with_context("net", net_doc.name.to_string()));
            }
            let chain = disk.add_chain(net, Name::new(chain_doc.name));
            for left in &chain_doc.links {
                let end = lookup_end(&ends_by_name, *left, net_doc.name)?;
                disk.append_link(chain, end)
                    .map_err(|e| e.with_operation("format::resolve"))?;
            }
        }

        for nested_name in &net_doc.nested {
            let nested = disk.net_by_name(Name::new(*nested_name)).ok_or_else(|| {
                Error::net_not_found(nested_name.to_string())
                    .with_operation("format::resolve")
                    .with_context("parent", net_doc.name.to_string())
            })?;
            disk.add_adjacency_component(net, nested)
                .map_err(|e| e.with_operation("format::resolve"))?;
        }
    }

    pair_declared_adjacencies(&mut disk, &instances_by_id, &declared)?;

    disk.root_net().map_err(|e| e.with_operation("format::resolve"))?;

    Ok(disk)
}

fn lookup_end(ends_by_name: &HashMap<u64, EndId>, name: u64, net: u64) -> Result<EndId> {
    ends_by_name.get(&name).copied().ok_or_else(|| {
        Error::end_not_found(name.to_string())
            .with_operation("format::resolve")
            .with_context("net", net.to_string())
    })
}

/// Apply declared pairings, requiring both sides to name each other.
fn pair_declared_adjacencies(
    disk: &mut NetDisk,
    instances_by_id: &HashMap<u64, EndInstanceId>,
    declared: &[(u64, u64)],
) -> Result<()> {
    let by_id: HashMap<u64, u64> = declared.iter().copied().collect();

    for &(id, partner_id) in declared {
        if id == partner_id {
            return Err(Error::invalid_format(format!(
                "end instance '{}' paired with itself",
                id
            ))
            .with_operation("format::resolve"));
        }
        match by_id.get(&partner_id) {
            Some(&back) if back == id => {}
            _ => {
                return Err(Error::invalid_format(format!(
                    "end instances '{}' and '{}' disagree on their pairing",
                    id, partner_id
                ))
                .with_operation("format::resolve"));
            }
        }
        // Each symmetric pair appears twice in `declared`; apply it once.
        if id < partner_id {
            let a = instances_by_id.get(&id).copied().ok_or_else(|| {
                Error::new(ErrorKind::InstanceNotFound, format!("instance '{}'", id))
                    .with_operation("format::resolve")
            })?;
            let b = instances_by_id.get(&partner_id).copied().ok_or_else(|| {
                Error::new(
                    ErrorKind::InstanceNotFound,
                    format!("instance '{}'", partner_id),
                )
                .with_operation("format::resolve")
            })?;
            disk.pair_adjacency(a, b)
                .map_err(|e| e.with_operation("format::resolve"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_json() {
        let err = parse("{ nets: oops").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn rejects_dangling_end_reference() {
        let text = r#"{
            "nets": [{
                "name": 1,
                "ends": [{ "name": 10 }],
                "atoms": [{ "name": 20, "left": 10, "right": 99 }]
            }]
        }"#;
        let err = parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndNotFound);
    }

    #[test]
    fn rejects_asymmetric_pairing() {
        let text = r#"{
            "nets": [{
                "name": 1,
                "ends": [{
                    "name": 10,
                    "instances": [
                        { "id": 100, "adjacency": 101 },
                        { "id": 101, "adjacency": 100 },
                        { "id": 102, "adjacency": 100 }
                    ]
                }]
            }]
        }"#;
        let err = parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn rejects_zero_link_chain() {
        let text = r#"{
            "nets": [{
                "name": 1,
                "chains": [{ "name": 30, "links": [] }]
            }]
        }"#;
        let err = parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }
}
