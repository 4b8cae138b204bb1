//! Search projection over the inventory snapshot.

use crate::item::Item;

/// Case-insensitive substring filter of `items` by name.
///
/// An empty query matches every item. Relative order is preserved, so the
/// filtered view renders in the same order as the full snapshot.
pub fn filter_by_name(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Vec<Item> {
        vec![
            Item::new("Rice", 3),
            Item::new("Brown Rice", 1),
            Item::new("Lentils", 5),
            Item::new("Olive Oil", 2),
        ]
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let out = filter_by_name(&pantry(), "rIcE");
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Brown Rice"]);
    }

    #[test]
    fn empty_query_returns_full_snapshot() {
        let items = pantry();
        assert_eq!(filter_by_name(&items, ""), items);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(filter_by_name(&pantry(), "chocolate").is_empty());
    }

    #[test]
    fn preserves_snapshot_order() {
        let out = filter_by_name(&pantry(), "o");
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Brown Rice", "Olive Oil"]);
    }

    #[test]
    fn quantity_is_carried_through() {
        let out = filter_by_name(&pantry(), "lentils");
        assert_eq!(out, vec![Item::new("Lentils", 5)]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        fn arbitrary_items() -> impl Strategy<Value = Vec<Item>> {
            vec(("[A-Za-z ]{0,12}", 0u64..100), 0..16)
                .prop_map(|entries| {
                    entries
                        .into_iter()
                        .map(|(name, quantity)| Item::new(name, quantity))
                        .collect()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every returned item matches the query (case-insensitively).
            #[test]
            fn every_result_contains_query(
                items in arbitrary_items(),
                query in "[A-Za-z]{0,6}"
            ) {
                let needle = query.to_lowercase();
                for item in filter_by_name(&items, &query) {
                    prop_assert!(item.name.to_lowercase().contains(&needle));
                }
            }

            /// Property: the result is an ordered subsequence of the input.
            #[test]
            fn result_is_ordered_subsequence(
                items in arbitrary_items(),
                query in "[A-Za-z]{0,6}"
            ) {
                let out = filter_by_name(&items, &query);
                let mut cursor = items.iter();
                for kept in &out {
                    prop_assert!(cursor.any(|original| original == kept));
                }
            }

            /// Property: the empty query is the identity projection.
            #[test]
            fn empty_query_is_identity(items in arbitrary_items()) {
                prop_assert_eq!(filter_by_name(&items, ""), items);
            }

            /// Property: filtering twice with the same query changes nothing.
            #[test]
            fn filter_is_idempotent(
                items in arbitrary_items(),
                query in "[A-Za-z]{0,6}"
            ) {
                let once = filter_by_name(&items, &query);
                let twice = filter_by_name(&once, &query);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
