//! Property-based tests for variant expansion.

use super::Expander;
use crate::node::{ConfigNode, Value};
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        (-100i64..100).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

// Keys never end in "_expand", so generated documents carry no markers
fn plain_value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z]{1,5}", inner), 0..4)
                .prop_map(|entries| Value::Node(entries.into_iter().collect())),
        ]
    })
}

fn plain_node_strategy() -> impl Strategy<Value = ConfigNode> {
    prop::collection::vec(("[a-z]{1,5}", plain_value_strategy()), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

// A node with some top-level keys marked for expansion over scalar lists
fn marked_node_strategy() -> impl Strategy<Value = (ConfigNode, usize)> {
    (
        plain_node_strategy(),
        prop::collection::vec(prop::collection::vec(scalar_strategy(), 1..4), 0..4),
    )
        .prop_map(|(mut node, lists)| {
            let mut expected = 1;
            for (i, list) in lists.into_iter().enumerate() {
                expected *= list.len();
                node.insert(format!("sweep{i}"), Value::Sequence(list));
                node.insert(format!("sweep{i}_expand"), true);
            }
            (node, expected)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Documents without markers expand to themselves
    #[test]
    fn unmarked_expansion_is_identity(node in plain_node_strategy()) {
        let variants = Expander::default().expand(&node).unwrap();
        prop_assert_eq!(variants, vec![node]);
    }

    // Variant count is the product of the marked list lengths
    #[test]
    fn marked_expansion_cardinality((node, expected) in marked_node_strategy()) {
        let expander = Expander::default();
        let variants = expander.expand(&node).unwrap();
        prop_assert_eq!(variants.len(), expected);
        prop_assert_eq!(expander.count(&Value::Node(node.clone())).unwrap(), expected);
    }

    // Every variant keeps every key, markers included, in insertion order
    #[test]
    fn variants_keep_keys((node, _) in marked_node_strategy()) {
        let keys: Vec<&str> = node.keys().collect();
        for variant in Expander::default().expand(&node).unwrap() {
            prop_assert_eq!(variant.keys().collect::<Vec<_>>(), keys.clone());
            for key in node.keys().filter(|k| k.ends_with("_expand")) {
                prop_assert_eq!(variant.get(key), node.get(key));
            }
        }
    }

    // Expanded values are drawn from the marked lists
    #[test]
    fn variants_choose_list_elements((node, _) in marked_node_strategy()) {
        for variant in Expander::default().expand(&node).unwrap() {
            for (key, value) in variant.iter() {
                if Expander::default().is_marked(&node, key) {
                    let list = node.get(key).unwrap().as_sequence().unwrap();
                    prop_assert!(list.contains(value));
                }
            }
        }
    }
}
