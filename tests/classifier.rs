use miniid3::prelude::*;


fn play_tennis() -> Sample {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/play_tennis.csv");
    Sample::from_csv(path, "play").unwrap()
}


#[test]
fn predict_follows_the_path() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    // The target value of the instance is ignored.
    let label = tree.predict(&["sunny", "cool", "high", "strong", "?"])
        .unwrap();
    assert_eq!(label, "no");

    let label = tree.predict(&["rain", "hot", "high", "weak", "?"])
        .unwrap();
    assert_eq!(label, "yes");

    let label = tree.predict(&["overcast", "?", "?", "?", "?"]).unwrap();
    assert_eq!(label, "yes");
}


#[test]
fn unseen_value_is_reported() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let err = tree.predict(&["foggy", "cool", "high", "strong", "?"])
        .unwrap_err();
    match err {
        Error::UnseenValue { attribute, value } => {
            assert_eq!(attribute, "outlook");
            assert_eq!(value, "foggy");
        },
        err => panic!("unexpected error: {err}"),
    }

    // `sunny` reaches the `humidity` node, which never saw `low`.
    let err = tree.predict(&["sunny", "cool", "low", "strong", "?"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "value `low` of attribute `humidity` not found in subtree"
    );
}


#[test]
fn instance_width_is_checked() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let err = tree.predict(&["sunny", "cool", "high"]).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedInstance { expected: 5, found: 3 }
    ));
}


#[test]
fn training_accuracy_of_consistent_sample() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let predictions = tree.predict_all(&sample).unwrap();
    assert_eq!(predictions.len(), 14);
    for (i, label) in predictions.into_iter().enumerate() {
        assert_eq!(label, sample.target_at(i));
    }

    assert_eq!(tree.accuracy(&sample).unwrap(), 1f64);
}


#[test]
fn accuracy_of_majority_leaf() {
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

    let accuracy = tree.accuracy(&sample).unwrap();
    assert!((accuracy - 4f64 / 6f64).abs() < 1e-12);
}


#[test]
fn accuracy_of_empty_sample_is_an_error() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let ix = (0..14).collect::<Vec<_>>();
    let (_, empty) = sample.split(&ix, 0, 0);
    assert!(matches!(tree.accuracy(&empty), Err(Error::EmptySample)));
}


#[test]
fn to_dot_file() {
    let sample = play_tennis();
    let tree = ID3Builder::new(&sample).build().fit().unwrap();

    let mut path = std::env::temp_dir();
    path.push("miniid3_play_tennis.dot");
    tree.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("label = \"outlook ?\""));
    assert!(dot.contains("label = \"overcast\""));

    // One node line per branch and leaf, one edge line per child.
    let n_nodes = dot.lines().filter(|l| l.contains(" [ label")).count()
        - dot.lines().filter(|l| l.contains(" -- ")).count();
    assert_eq!(n_nodes, 8);
}
