use miniid3::prelude::*;
use miniid3::{AttributeSet, BranchNode, LeafNode};


fn play_tennis() -> Sample {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/play_tennis.csv");
    Sample::from_csv(path, "play").unwrap()
}


fn as_leaf(node: &Node) -> &LeafNode {
    match node {
        Node::Leaf(leaf) => leaf,
        Node::Branch(_) => panic!("expected a leaf, got {node:?}"),
    }
}


fn as_branch(node: &Node) -> &BranchNode {
    match node {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("expected a branch, got {node:?}"),
    }
}


/// Collects the attribute indices along every root-to-leaf path.
fn paths(node: &Node, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    match node {
        Node::Leaf(_) => out.push(prefix.clone()),
        Node::Branch(branch) => {
            prefix.push(branch.attribute());
            for (_, child) in branch.children() {
                paths(child, prefix, out);
            }
            prefix.pop();
        },
    }
}


#[test]
fn perfect_predictor_gives_one_split() {
    let header = vec!["a", "class"];
    let rows = vec![
        vec!["x", "yes"],
        vec!["x", "yes"],
        vec!["y", "no"],
        vec!["y", "no"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let root = as_branch(tree.root());
    assert_eq!(root.attribute(), 0);
    assert_eq!(root.children().len(), 2);
    assert_eq!(as_leaf(root.child("x").unwrap()).label(), "yes");
    assert_eq!(as_leaf(root.child("y").unwrap()).label(), "no");
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.n_leaves(), 2);
}


#[test]
fn single_class_gives_single_leaf() {
    let header = vec!["a", "b", "class"];
    let rows = vec![
        vec!["x", "p", "cat"],
        vec!["y", "q", "cat"],
        vec!["z", "p", "cat"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(as_leaf(tree.root()).label(), "cat");
    assert_eq!(tree.depth(), 0);
}


#[test]
fn zero_gain_gives_majority_leaf() {
    let header = vec!["a", "class"];
    let rows = vec![
        vec!["x", "no"],
        vec!["x", "yes"],
        vec!["y", "no"],
        vec!["y", "yes"],
        vec!["x", "yes"],
        vec!["y", "yes"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(as_leaf(tree.root()).label(), "yes");
}


#[test]
fn zero_gain_stops_before_interactions() {
    // Neither attribute alone tells anything about the XOR label.
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/xor.csv");
    let sample = Sample::from_csv(path, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    // `neg` and `pos` tie; the first seen wins.
    assert_eq!(as_leaf(tree.root()).label(), "neg");
}


#[test]
fn no_attribute_left_gives_majority_leaf() {
    // The same `a` maps to different labels,
    // so the only split leaves impure children.
    let header = vec!["a", "class"];
    let rows = vec![
        vec!["x", "no"],
        vec!["x", "yes"],
        vec!["x", "yes"],
        vec!["y", "no"],
        vec!["y", "no"],
        vec!["y", "no"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let root = as_branch(tree.root());
    assert_eq!(as_leaf(root.child("x").unwrap()).label(), "yes");
    assert_eq!(as_leaf(root.child("y").unwrap()).label(), "no");
}


#[test]
fn equal_gains_prefer_the_later_attribute() {
    let header = vec!["a", "b", "class"];
    let rows = vec![
        vec!["x", "p", "yes"],
        vec!["x", "p", "yes"],
        vec!["y", "q", "no"],
        vec!["y", "q", "no"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(as_branch(tree.root()).attribute(), 1);
}


#[test]
fn target_may_be_any_column() {
    let header = vec!["class", "a"];
    let rows = vec![
        vec!["yes", "x"],
        vec!["no", "y"],
    ];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(tree.target_index(), 0);
    assert_eq!(tree.target_name(), "class");
    assert_eq!(as_branch(tree.root()).attribute(), 1);
}


#[test]
fn play_tennis_tree() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let root = as_branch(tree.root());
    assert_eq!(tree.attributes()[root.attribute()], "outlook");

    let values = root.children()
        .iter()
        .map(|(v, _)| v.as_str())
        .collect::<Vec<_>>();
    assert_eq!(values, vec!["sunny", "overcast", "rain"]);

    let sunny = as_branch(root.child("sunny").unwrap());
    assert_eq!(tree.attributes()[sunny.attribute()], "humidity");
    assert_eq!(as_leaf(sunny.child("high").unwrap()).label(), "no");
    assert_eq!(as_leaf(sunny.child("normal").unwrap()).label(), "yes");

    assert_eq!(as_leaf(root.child("overcast").unwrap()).label(), "yes");

    let rain = as_branch(root.child("rain").unwrap());
    assert_eq!(tree.attributes()[rain.attribute()], "wind");
    assert_eq!(as_leaf(rain.child("weak").unwrap()).label(), "yes");
    assert_eq!(as_leaf(rain.child("strong").unwrap()).label(), "no");

    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.n_leaves(), 5);
}


#[test]
fn no_attribute_repeats_along_a_path() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let mut out = Vec::new();
    paths(tree.root(), &mut Vec::new(), &mut out);
    assert_eq!(out.len(), tree.n_leaves());

    for path in out {
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "path {path:?} repeats");
        assert!(!path.contains(&tree.target_index()));
    }
}


#[test]
fn leaves_are_target_values() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    fn check(node: &Node, sample: &Sample) {
        match node {
            Node::Leaf(leaf) => {
                assert!(sample.target_values().contains(leaf.label()));
            },
            Node::Branch(branch) => {
                branch.children()
                    .iter()
                    .for_each(|(_, child)| check(child, sample));
            },
        }
    }
    check(tree.root(), &sample);
}


#[test]
fn induction_is_deterministic() {
    let sample = play_tennis();
    let first = ID3Builder::new(&sample).build().fit().unwrap();
    let second = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(first, second);
}


#[test]
fn verbose_run_grows_the_same_tree() {
    let sample = play_tennis();
    let quiet = ID3Builder::new(&sample).build().fit().unwrap();
    let verbose = ID3Builder::new(&sample)
        .verbose(true)
        .build()
        .fit()
        .unwrap();

    assert_eq!(quiet, verbose);
}


#[test]
fn empty_sample_is_rejected() {
    let header = vec!["a", "class"];
    let rows: Vec<Vec<&str>> = Vec::new();
    let sample = Sample::new(header, rows, "class").unwrap();

    let err = ID3Builder::new(&sample).build().fit().unwrap_err();
    assert!(matches!(err, Error::EmptySample));
}


#[test]
fn display() {
    let sample = play_tennis();
    let id3 = ID3Builder::new(&sample).build();
    let info = format!("{id3}");
    assert!(info.contains("# of instances: 14"));
    assert!(info.contains("# of classes: 2"));
    assert!(info.contains("Target attribute = play"));

    let tree = id3.fit().unwrap();
    let text = format!("{tree}");
    let expected = "\
        outlook = sunny\n    \
            humidity = high -> no\n    \
            humidity = normal -> yes\n\
        outlook = overcast -> yes\n\
        outlook = rain\n    \
            wind = weak -> yes\n    \
            wind = strong -> no\n";
    assert_eq!(text, expected);
}


#[test]
fn single_leaf_display() {
    let header = vec!["a", "class"];
    let rows = vec![vec!["x", "yes"]];
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert_eq!(format!("{tree}"), "-> yes\n");
}


#[test]
fn independent_attribute_with_uneven_split_gives_leaf() {
    // `a` is independent of `class`: both values hold 40% `yes`.
    // Rounding leaves the computed gain a few ulps away from zero.
    let header = vec!["a", "class"];
    let mut rows = Vec::new();
    rows.extend(vec![vec!["x", "yes"]; 2]);
    rows.extend(vec![vec!["x", "no"]; 3]);
    rows.extend(vec![vec!["y", "yes"]; 4]);
    rows.extend(vec![vec!["y", "no"]; 6]);
    let sample = Sample::new(header, rows, "class").unwrap();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert!(tree.root().is_leaf());
    assert_eq!(as_leaf(tree.root()).label(), "no");
}


#[test]
fn branches_and_leaves_are_told_apart() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    assert!(!tree.root().is_leaf());
    let root = as_branch(tree.root());
    assert!(root.child("overcast").unwrap().is_leaf());
    assert!(!root.child("sunny").unwrap().is_leaf());
}


#[test]
fn attribute_set_drops_one_attribute() {
    let sample = play_tennis();
    let attributes = AttributeSet::features_of(&sample);

    assert_eq!(attributes.len(), 4);
    assert!(!attributes.contains(sample.target_index()));
    assert_eq!(attributes.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    let remaining = attributes.without(2);
    assert_eq!(remaining.len(), 3);
    assert!(!remaining.contains(2));
    assert!(remaining.contains(0));
    assert_eq!(remaining.iter().collect::<Vec<_>>(), vec![0, 1, 3]);

    // The original set is left as is.
    assert!(attributes.contains(2));

    let empty = AttributeSet::from_indices(5, Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}
