//! cactusview command-line interface.
//!
//! The pipeline is load -> resolve root -> render: read the disk
//! document, find the net to start from, and flatten the tree into one
//! DOT document returned as a string for the binary to write out.

use std::time::Instant;

use tracing::info;

use cactusview_dot::{RenderOptions, render_to_string};
use cactusview_error::{Error, Result};
use cactusview_model::{Name, NetDisk, NetId, format};

/// Options for running cactusview.
pub struct CactusviewOptions {
    /// Path to the disk document.
    pub disk: String,
    /// Root net name; `None` renders from the disk's own root.
    pub net: Option<String>,
    /// Give end nodes name labels.
    pub name_labels: bool,
}

/// Main entry point: load the disk and render the requested net tree.
pub fn run_main(opts: &CactusviewOptions) -> Result<String> {
    let load_start = Instant::now();
    let disk = format::load(&opts.disk)?;
    info!("Disk load: {:.2}s", load_start.elapsed().as_secs_f64());

    let root = resolve_root(&disk, opts.net.as_deref())?;
    info!(root = %disk.net(root).name(), "rendering net tree");

    let render_start = Instant::now();
    let output = render_to_string(
        &disk,
        root,
        &RenderOptions {
            name_labels: opts.name_labels,
        },
    )?;
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(output)
}

/// Pick the traversal root: an explicitly named net, or the tree's root.
fn resolve_root(disk: &NetDisk, net: Option<&str>) -> Result<NetId> {
    match net {
        Some(name) => {
            let name: Name = name.parse()?;
            disk.net_by_name(name)
                .ok_or_else(|| Error::net_not_found(name.to_string()).with_operation("cli::resolve_root"))
        }
        None => disk.root_net(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_net_disk() -> NetDisk {
        let mut disk = NetDisk::new();
        let root = disk.add_net(Name::new(1)).unwrap();
        let child = disk.add_net(Name::new(2)).unwrap();
        disk.add_adjacency_component(root, child).unwrap();
        disk
    }

    #[test]
    fn resolve_root_defaults_to_tree_root() {
        let disk = two_net_disk();
        let root = resolve_root(&disk, None).unwrap();
        assert_eq!(disk.net(root).name(), Name::new(1));
    }

    #[test]
    fn resolve_root_honours_explicit_name() {
        let disk = two_net_disk();
        let net = resolve_root(&disk, Some("2")).unwrap();
        assert_eq!(disk.net(net).name(), Name::new(2));
    }

    #[test]
    fn resolve_root_rejects_unknown_and_garbage_names() {
        let disk = two_net_disk();
        assert!(resolve_root(&disk, Some("99")).is_err());
        assert!(resolve_root(&disk, Some("root")).is_err());
    }
}
