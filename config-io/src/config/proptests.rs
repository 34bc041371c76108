//! Property-based tests for merging and format round-trips.

use super::merger::ConfigMerger;
use crate::format::{self, Format};
use crate::node::{ConfigNode, Value};
use proptest::prelude::*;

// Scalars that survive both JSON and YAML unchanged
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::NULL),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-4000i32..4000).prop_map(|i| Value::from(f64::from(i) / 8.0)),
        "[a-z][a-z0-9_ ]{0,12}".prop_map(Value::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| {
                Value::Node(entries.into_iter().collect())
            }),
        ]
    })
}

fn node_strategy() -> impl Strategy<Value = ConfigNode> {
    prop::collection::vec(("[a-z]{1,6}", value_strategy()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Overlay keys win, base-only keys survive, nothing else appears
    #[test]
    fn merge_overlay_wins(base in node_strategy(), overlay in node_strategy()) {
        let merged = ConfigMerger::merge(base.clone(), overlay.clone());

        for (key, value) in overlay.iter() {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in base.iter() {
            if !overlay.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        let union = base.keys().filter(|k| !overlay.contains_key(k)).count() + overlay.len();
        prop_assert_eq!(merged.len(), union);
    }

    // Empty node is identity element for merge
    #[test]
    fn merge_identity(node in node_strategy()) {
        prop_assert_eq!(ConfigMerger::merge(ConfigNode::new(), node.clone()), node.clone());
        prop_assert_eq!(ConfigMerger::merge(node.clone(), ConfigNode::new()), node);
    }

    // Render then parse gives back the same node, in the same key order
    #[test]
    fn render_parse_round_trip(node in node_strategy()) {
        for fmt in [Format::Json, Format::Yaml] {
            let text = fmt.render(&node).unwrap();
            let parsed = fmt.parse(&text).unwrap().into_node().unwrap_or_default();
            prop_assert_eq!(&parsed, &node);
            prop_assert_eq!(parsed.keys().collect::<Vec<_>>(), node.keys().collect::<Vec<_>>());
        }
    }

    // Dump then load through the filesystem
    #[test]
    fn dump_load_round_trip(node in node_strategy()) {
        let temp_dir = tempfile::TempDir::new().unwrap();
        for name in ["doc.json", "doc.yaml"] {
            let path = temp_dir.path().join(name);
            format::dump(&path, &node).unwrap();
            prop_assert_eq!(format::load(&path).unwrap(), node.clone());
        }
    }
}
