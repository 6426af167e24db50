use pretty_assertions::assert_eq;

use cactusview_dot::{ErrorKind, RenderOptions, render_to_string};
use cactusview_model::{Name, NetDisk, NetId};

fn render(disk: &NetDisk, root: NetId) -> String {
    render_to_string(disk, root, &RenderOptions::default()).expect("render succeeds")
}

fn node_lines<'a>(out: &'a str, id: &str) -> Vec<&'a str> {
    let needle = format!("\"{}\" [", id);
    out.lines()
        .filter(|l| l.contains(&needle) && !l.contains("->"))
        .collect()
}

fn edge_lines<'a>(out: &'a str, colour: &str) -> Vec<&'a str> {
    let needle = format!("color={},", colour);
    out.lines()
        .filter(|l| l.contains("->") && l.contains(&needle))
        .collect()
}

/// Root net with one trivial two-instance atom, one stub end, and paired
/// end instances on the atom ends. Matches the first behavioural scenario.
fn trivial_atom_disk() -> (NetDisk, NetId) {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();
    let left = disk.add_end(net, Name::new(10));
    let right = disk.add_end(net, Name::new(11));
    disk.add_end(net, Name::new(12)); // stub
    let atom = disk.add_atom(net, Name::new(20), left, right).unwrap();
    disk.add_atom_instance(atom);
    disk.add_atom_instance(atom);

    let li = disk.add_end_instance(left);
    let ri = disk.add_end_instance(right);
    disk.pair_adjacency(li, ri).unwrap();
    (disk, net)
}

#[test]
fn repeated_renders_are_byte_identical() {
    let (disk, root) = trivial_atom_disk();
    let first = render(&disk, root);
    let second = render(&disk, root);
    assert_eq!(first, second);
}

#[test]
fn trivial_atom_scenario_counts() {
    let (disk, root) = trivial_atom_disk();
    let out = render(&disk, root);

    // Two end nodes of the atom, one per side.
    assert_eq!(node_lines(&out, "10").len(), 1);
    assert_eq!(node_lines(&out, "11").len(), 1);
    // The stub end is declared because this net is the traversal root.
    assert_eq!(node_lines(&out, "12").len(), 1);

    // One black edge per atom instance, fixed length and weight.
    let black = edge_lines(&out, "black");
    assert_eq!(black.len(), 2);
    for line in &black {
        assert!(line.contains("len=5,"));
        assert!(line.contains("weight=10,"));
    }

    // The net is a leaf, so each paired end instance draws a grey edge.
    let grey = edge_lines(&out, "grey");
    assert_eq!(grey.len(), 2);
    for line in &grey {
        assert!(line.contains("len=10,"));
        assert!(line.contains("weight=1,"));
    }
}

#[test]
fn atom_edges_match_instance_count() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();
    let left = disk.add_end(net, Name::new(10));
    let right = disk.add_end(net, Name::new(11));
    let atom = disk.add_atom(net, Name::new(20), left, right).unwrap();
    for _ in 0..5 {
        disk.add_atom_instance(atom);
    }

    let out = render(&disk, net);
    assert_eq!(edge_lines(&out, "black").len(), 5);
}

#[test]
fn stub_ends_only_appear_at_the_root() {
    let mut disk = NetDisk::new();
    let root = disk.add_net(Name::new(1)).unwrap();
    disk.add_end(root, Name::new(10)); // root stub

    let child = disk.add_net(Name::new(2)).unwrap();
    disk.add_end(child, Name::new(11)); // nested stub
    disk.add_adjacency_component(root, child).unwrap();

    let out = render(&disk, root);
    assert_eq!(node_lines(&out, "10").len(), 1);
    assert!(node_lines(&out, "11").is_empty());
}

#[test]
fn chain_of_length_three_draws_two_atoms() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();

    // Position 0 anchors at a stub end; positions 1 and 2 anchor atoms.
    let entry = disk.add_end(net, Name::new(10));
    let a_left = disk.add_end(net, Name::new(11));
    let a_right = disk.add_end(net, Name::new(12));
    let b_left = disk.add_end(net, Name::new(13));
    let b_right = disk.add_end(net, Name::new(14));
    let a = disk.add_atom(net, Name::new(20), a_left, a_right).unwrap();
    let b = disk.add_atom(net, Name::new(21), b_left, b_right).unwrap();
    disk.add_atom_instance(a);
    disk.add_atom_instance(b);

    let chain = disk.add_chain(net, Name::new(30));
    disk.append_link(chain, entry).unwrap();
    disk.append_link(chain, a_left).unwrap();
    disk.append_link(chain, b_left).unwrap();

    let out = render(&disk, net);

    // Both atoms drawn in the first palette colour; nothing black.
    assert_eq!(edge_lines(&out, "red").len(), 2);
    assert!(edge_lines(&out, "black").is_empty());
}

#[test]
fn chain_of_length_one_draws_nothing() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();
    let entry = disk.add_end(net, Name::new(10));
    let chain = disk.add_chain(net, Name::new(30));
    disk.append_link(chain, entry).unwrap();

    let out = render(&disk, net);
    assert!(out.lines().all(|l| !l.contains("->")));
}

#[test]
fn chains_get_distinct_stable_colours() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();

    for i in 0..2u64 {
        let entry = disk.add_end(net, Name::new(100 + i * 10));
        let left = disk.add_end(net, Name::new(101 + i * 10));
        let right = disk.add_end(net, Name::new(102 + i * 10));
        let atom = disk
            .add_atom(net, Name::new(120 + i), left, right)
            .unwrap();
        disk.add_atom_instance(atom);
        let chain = disk.add_chain(net, Name::new(130 + i));
        disk.append_link(chain, entry).unwrap();
        disk.append_link(chain, left).unwrap();
    }

    let out = render(&disk, net);
    assert_eq!(edge_lines(&out, "red").len(), 1);
    assert_eq!(edge_lines(&out, "blue").len(), 1);
}

#[test]
fn adjacencies_are_emitted_only_at_leaf_nets() {
    let mut disk = NetDisk::new();
    let root = disk.add_net(Name::new(1)).unwrap();
    let root_end = disk.add_end(root, Name::new(10));
    let ri1 = disk.add_end_instance(root_end);
    let ri2 = disk.add_end_instance(root_end);
    disk.pair_adjacency(ri1, ri2).unwrap();

    let child = disk.add_net(Name::new(2)).unwrap();
    let child_end = disk.add_end(child, Name::new(11));
    let ci1 = disk.add_end_instance(child_end);
    let ci2 = disk.add_end_instance(child_end);
    disk.pair_adjacency(ci1, ci2).unwrap();
    disk.add_adjacency_component(root, child).unwrap();

    let out = render(&disk, root);
    let grey = edge_lines(&out, "grey");
    // Only the leaf's two instances draw; the root's pairing stays silent.
    assert_eq!(grey.len(), 2);
    for line in &grey {
        assert!(line.contains("\"11\""));
        assert!(!line.contains("\"10\""));
    }
}

#[test]
fn empty_nested_net_is_visited_without_output() {
    let mut disk = NetDisk::new();
    let root = disk.add_net(Name::new(1)).unwrap();
    disk.add_end(root, Name::new(10));
    let child = disk.add_net(Name::new(2)).unwrap();
    disk.add_adjacency_component(root, child).unwrap();

    let out = render(&disk, root);
    // The stub node is the only declaration between the braces.
    assert_eq!(node_lines(&out, "10").len(), 1);
    assert!(out.lines().all(|l| !l.contains("->")));
}

#[test]
fn recursion_reaches_every_nested_net() {
    let mut disk = NetDisk::new();
    let root = disk.add_net(Name::new(1)).unwrap();
    let child = disk.add_net(Name::new(2)).unwrap();
    let grandchild = disk.add_net(Name::new(3)).unwrap();
    disk.add_adjacency_component(root, child).unwrap();
    disk.add_adjacency_component(child, grandchild).unwrap();

    let left = disk.add_end(grandchild, Name::new(10));
    let right = disk.add_end(grandchild, Name::new(11));
    let atom = disk
        .add_atom(grandchild, Name::new(20), left, right)
        .unwrap();
    disk.add_atom_instance(atom);

    let out = render(&disk, root);
    // The grandchild's atom surfaces even though it is two levels down.
    assert_eq!(edge_lines(&out, "black").len(), 1);
    assert_eq!(node_lines(&out, "10").len(), 1);
    assert_eq!(node_lines(&out, "11").len(), 1);
}

#[test]
fn unlinked_chain_position_is_fatal() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();
    let entry = disk.add_end(net, Name::new(10));
    let dangling = disk.add_end(net, Name::new(11)); // bounds no atom
    let chain = disk.add_chain(net, Name::new(30));
    disk.append_link(chain, entry).unwrap();
    disk.append_link(chain, dangling).unwrap();

    let err = render_to_string(&disk, net, &RenderOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnlinkedAtom);
}

#[test]
fn unpaired_end_instance_is_fatal() {
    let mut disk = NetDisk::new();
    let net = disk.add_net(Name::new(1)).unwrap();
    let end = disk.add_end(net, Name::new(10));
    disk.add_end_instance(end);

    let err = render_to_string(&disk, net, &RenderOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingAdjacency);
}

#[test]
fn name_labels_toggle_fills_node_labels() {
    let (disk, root) = trivial_atom_disk();

    let plain = render_to_string(&disk, root, &RenderOptions::default()).unwrap();
    assert!(plain.contains("\"10\" [label=\"\","));

    let labelled = render_to_string(
        &disk,
        root,
        &RenderOptions { name_labels: true },
    )
    .unwrap();
    assert!(labelled.contains("\"10\" [label=\"10\","));
}

#[test]
fn nodes_precede_their_atom_edges() {
    let (disk, root) = trivial_atom_disk();
    let out = render(&disk, root);

    let first_node = out.find("\"10\" [").unwrap();
    let first_edge = out.find("->").unwrap();
    assert!(first_node < first_edge);
}
