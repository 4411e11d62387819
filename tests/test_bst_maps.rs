use simplelog::{Config, LevelFilter, TestLogger};

const NUM_OF_OPERATIONS: usize = 10_000;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

macro_rules! bst_map_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use balanced_collections::Error;
                use proptest::prelude::*;
                use rand::Rng;
                use std::collections::BTreeMap;
                use super::{init_logger, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_map() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = BTreeMap::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 1000u32);
                        let val = rng.next_u32();

                        if rng.gen::<bool>() {
                            let (cursor, inserted) = map.insert(key, val);
                            assert_eq!(inserted, !expected.contains_key(&key));
                            expected.entry(key).or_insert(val);
                            assert_eq!(map.entry_at(cursor), Some((&key, &expected[&key])));
                        } else {
                            assert_eq!(map.remove(&key).map(|pair| pair.1), expected.remove(&key));
                        }

                        assert!(map.verify().is_ok());
                        assert_eq!(map.len(), expected.len());
                        assert_eq!(map.min(), expected.keys().next());
                        assert_eq!(map.max(), expected.keys().next_back());
                    }

                    assert_eq!(
                        map.iter().collect::<Vec<(&u32, &u32)>>(),
                        expected.iter().collect::<Vec<(&u32, &u32)>>(),
                    );
                    assert_eq!(
                        map.iter().rev().collect::<Vec<(&u32, &u32)>>(),
                        expected.iter().rev().collect::<Vec<(&u32, &u32)>>(),
                    );
                }

                #[test]
                fn int_test_erase_all_in_random_order() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut keys: Vec<u32> = (0..1000).collect();
                    let mut map: $type_name<u32, u32> = keys.iter().map(|key| (*key, *key)).collect();
                    assert_eq!(map.len(), 1000);

                    rng.shuffle(&mut keys);
                    for (index, key) in keys.iter().enumerate() {
                        assert_eq!(map.erase(key), Ok(true));
                        assert!(!map.contains_key(key));
                        assert_eq!(map.len(), 999 - index);
                        assert!(map.verify().is_ok());
                    }

                    assert!(map.is_empty());
                    assert_eq!(map.begin(), map.end());
                    assert_eq!(map.erase(&0), Err(Error::EmptyContainer));
                }

                #[test]
                fn int_test_height_is_logarithmic() {
                    let map: $type_name<u32, ()> = (0..1 << 12).map(|key| (key, ())).collect();
                    // Both strategies stay within twice the optimal height.
                    assert!(map.height().unwrap() <= 2 * 12);
                    assert!(map.verify().is_ok());
                }

                #[test]
                fn int_test_set_default() {
                    let mut map = $type_name::new();
                    assert_eq!(map.set_default(10, String::from("x")), "x");
                    assert_eq!(map.set_default(10, String::from("y")), "x");
                    assert_eq!(map.len(), 1);
                    assert_eq!(map.try_get(&10).map(String::as_str), Ok("x"));
                    assert_eq!(map.try_get(&11), Err(Error::KeyNotFound));
                }

                #[test]
                fn int_test_erase_after_insert_restores_map() {
                    let mut map: $type_name<u32, u32> = (0..100).map(|key| (key * 2, key)).collect();
                    let before = map.clone();

                    let (_, inserted) = map.insert(51, 0);
                    assert!(inserted);
                    assert_eq!(map.erase(&51), Ok(true));

                    assert_eq!(map, before);
                    assert!(map.verify().is_ok());
                }

                #[test]
                fn int_test_cursor_walk() {
                    let mut map: $type_name<u32, u32> = (0..50).map(|key| (key, key)).collect();

                    let mut cursor = map.begin();
                    let mut forward = Vec::new();
                    while cursor != map.end() {
                        forward.push(*map.entry_at(cursor).unwrap().0);
                        cursor = map.next_cursor(cursor);
                    }
                    assert_eq!(forward, (0..50).collect::<Vec<u32>>());

                    let mut cursor = map.rbegin();
                    let mut backward = Vec::new();
                    while cursor != map.rend() {
                        backward.push(*map.entry_at(cursor).unwrap().0);
                        cursor = map.prev_cursor(cursor);
                    }
                    assert_eq!(backward, (0..50).rev().collect::<Vec<u32>>());

                    // Erase every even key through cursors.
                    let mut cursor = map.begin();
                    while cursor != map.end() {
                        let next = map.erase_at(cursor).unwrap();
                        cursor = map.next_cursor(next);
                    }
                    assert_eq!(map.keys().cloned().collect::<Vec<u32>>(), (0..25).map(|key| key * 2 + 1).collect::<Vec<u32>>());
                    assert!(map.verify().is_ok());
                }

                proptest! {
                    #[test]
                    fn prop_matches_btreemap(
                        inserts in prop::collection::vec((any::<u16>(), any::<u16>()), 0..200),
                        removals in prop::collection::vec(any::<u16>(), 0..200),
                    ) {
                        let mut map = $type_name::new();
                        let mut expected = BTreeMap::new();
                        for (key, val) in inserts {
                            map.insert(key, val);
                            expected.entry(key).or_insert(val);
                        }
                        prop_assert!(map.verify().is_ok());

                        for key in removals {
                            prop_assert_eq!(map.remove(&key).map(|pair| pair.1), expected.remove(&key));
                            prop_assert!(map.verify().is_ok());
                        }

                        prop_assert_eq!(
                            map.into_iter().collect::<Vec<(u16, u16)>>(),
                            expected.into_iter().collect::<Vec<(u16, u16)>>(),
                        );
                    }

                    #[test]
                    fn prop_iteration_is_sorted(keys in prop::collection::vec(any::<i32>(), 0..300)) {
                        let map: $type_name<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
                        let mut sorted = keys.clone();
                        sorted.sort();
                        sorted.dedup();
                        prop_assert_eq!(map.keys().cloned().collect::<Vec<i32>>(), sorted);
                    }
                }
            }
        )*
    }
}

bst_map_tests!(
    avl_tree: AvlMap,
    red_black_tree: RedBlackMap,
);
