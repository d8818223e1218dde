use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::{Config, Entry, Geometric, SkipList, SkipListError};

#[derive(Debug, Clone)]
enum Op {
    Insert(String, String),
    Remove(String),
    Update(String, String),
    Search(String),
    Prefix(char),
}

// A small alphabet so that operations collide often.
fn key_strategy() -> impl Strategy<Value = String> + Clone {
    "[a-e]{1,4}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let value = "[a-z]{0,6}";
    let op = prop_oneof![
        40 => (key.clone(), value).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        15 => (key.clone(), value).prop_map(|(k, v)| Op::Update(k, v)),
        15 => key.prop_map(Op::Search),
        5 => prop::char::range('a', 'f').prop_map(Op::Prefix),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy(), seed in any::<u64>()) {
        let generator = Geometric::seeded(usize::MAX, 0.5, seed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut list = SkipList::with_generator(Config::default(), generator);
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let got = list.insert(key.clone(), value.clone());
                    if model.contains_key(&key) {
                        prop_assert_eq!(got, Err(SkipListError::Conflict(key)));
                    } else {
                        prop_assert_eq!(got, Ok(()));
                        model.insert(key, value);
                    }
                }
                Op::Remove(key) => {
                    let got = list.remove(&key).map(Entry::into_parts).ok();
                    let expected = model.remove_entry(&key);
                    prop_assert_eq!(got, expected);
                }
                Op::Update(key, value) => {
                    let got = list.update(&key, value.clone()).ok();
                    let expected = model.get_mut(&key).map(|old| std::mem::replace(old, value));
                    prop_assert_eq!(got, expected);
                }
                Op::Search(key) => {
                    prop_assert_eq!(list.search(&key), model.get(&key).map(String::as_str));
                }
                Op::Prefix(c) => {
                    let expected: Vec<&str> = model
                        .keys()
                        .filter(|k| k.starts_with(c))
                        .map(String::as_str)
                        .collect();
                    match list.entries_with_prefix_char(c) {
                        Ok(prefix) => {
                            let got: Vec<&str> = prefix.map(Entry::key).collect();
                            prop_assert_eq!(got, expected);
                        }
                        Err(err) => {
                            prop_assert_eq!(err, SkipListError::Empty);
                            prop_assert!(model.is_empty());
                        }
                    }
                }
            }

            prop_assert_eq!(list.len(), model.len());
            if let Err(err) = list.validate() {
                return Err(TestCaseError::fail(err.to_string()));
            }
        }

        let got: Vec<(&str, &str)> = list.iter().map(|e| (e.key(), e.value())).collect();
        let expected: Vec<(&str, &str)> = model.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        prop_assert_eq!(got, expected);

        list.clear();
        prop_assert!(list.validate().is_ok());
    }

    #[test]
    fn prop_bounded(keys in prop::collection::vec(key_strategy(), 0..=200), seed in any::<u64>()) {
        let config = Config::default().max_height(3).max_length(20).max_nodes(40);
        let generator = Geometric::seeded(3, 0.5, seed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut list = SkipList::with_generator(config, generator);

        for key in keys {
            let before = list.len();
            match list.insert(key, "") {
                Ok(()) => prop_assert_eq!(list.len(), before + 1),
                Err(
                    SkipListError::Conflict(_)
                    | SkipListError::CapacityExceeded(_)
                    | SkipListError::AllocationFailure,
                ) => prop_assert_eq!(list.len(), before),
                Err(err) => return Err(TestCaseError::fail(err.to_string())),
            }
            prop_assert!(list.height() <= 3);
            prop_assert!(list.len() <= 20);
            if let Err(err) = list.validate() {
                return Err(TestCaseError::fail(err.to_string()));
            }
        }
    }
}
