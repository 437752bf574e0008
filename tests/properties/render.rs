//! Property tests for the layout engine.

use proptest::prelude::*;

use dirgram::{generate, TreeNode, PATH_FIELD_WIDTH};

/// Paths short enough that every node stays inside the path field even
/// a few levels deep; charset excludes anything that could mimic the
/// annotation delimiter.
fn safe_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,4}(/[a-z]{1,3})?/?").unwrap()
}

fn safe_desc() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z]{1,10}( [a-z]{1,10}){0,6}").unwrap(),
        0..3,
    )
}

/// Reduce every node to at most one short description line so that no
/// continuation lines appear (those align at the text column, not the
/// delimiter column).
fn clamp_descs(node: &mut TreeNode) {
    node.desc.truncate(1);
    if let Some(line) = node.desc.first_mut() {
        *line = line.chars().take(30).collect();
    }
    for child in &mut node.children {
        clamp_descs(child);
    }
}

fn tree() -> impl Strategy<Value = TreeNode> {
    let leaf = (safe_path(), safe_desc()).prop_map(|(path, desc)| TreeNode {
        path,
        desc,
        children: Vec::new(),
    });
    leaf.prop_recursive(3, 12, 3, |inner| {
        (
            safe_path(),
            safe_desc(),
            proptest::collection::vec(inner, 0..3),
        )
            .prop_map(|(path, desc, children)| TreeNode {
                path,
                desc,
                children,
            })
    })
}

/// Char index where the `<= ` delimiter or the placeholder begins.
fn annotation_column(line: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .windows(3)
        .position(|w| w == ['<', '=', ' '])
        .or_else(|| {
            let placeholder: Vec<char> = "[no description]".chars().collect();
            chars
                .windows(placeholder.len())
                .position(|w| w == placeholder.as_slice())
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering never panics, whatever the tree looks like.
    #[test]
    fn property_generate_never_panics(
        paths in proptest::collection::vec(".{0,20}", 0..5),
        descs in proptest::collection::vec(".{0,100}", 0..5),
    ) {
        let nodes: Vec<TreeNode> = paths
            .into_iter()
            .map(|path| TreeNode {
                path,
                desc: descs.clone(),
                children: Vec::new(),
            })
            .collect();
        let _ = generate(&nodes);
    }

    /// PROPERTY: every path appears verbatim in the output; no node is
    /// silently dropped.
    #[test]
    fn property_every_path_appears(
        nodes in proptest::collection::vec(tree(), 0..4),
    ) {
        let out = generate(&nodes);
        let mut stack: Vec<&TreeNode> = nodes.iter().collect();
        while let Some(node) = stack.pop() {
            prop_assert!(
                out.contains(&node.path),
                "path {:?} missing from output",
                node.path
            );
            stack.extend(node.children.iter());
        }
    }

    /// PROPERTY: the annotation delimiter (or placeholder) sits at the
    /// same column on every line, for trees within the path field.
    #[test]
    fn property_annotation_column_constant(
        mut nodes in proptest::collection::vec(tree(), 1..4),
    ) {
        for node in &mut nodes {
            clamp_descs(node);
        }
        let out = generate(&nodes);
        for line in out.lines() {
            let col = annotation_column(line);
            prop_assert_eq!(
                col,
                Some(PATH_FIELD_WIDTH),
                "misaligned line: {:?}",
                line
            );
        }
    }
}
