//! Dictionary workout helpers shared by the table tests.
use chaingraph_core::core::{Dictionary, HashKey};
use std::fmt::Debug;

/// Runs a dictionary through a full insert/find/remove cycle over `keys`, asserting size
/// accounting at every step.
///
/// # Panics
///
/// - If any key is lost, any size count is off, or a removed key is still found.
///
/// # Notes
///
/// - `keys` must be pairwise distinct; with duplicates the value checks would be ambiguous.
pub fn exercise_dictionary<K, D>(dict: &mut D, keys: &[K])
where
    K: HashKey + Clone + Debug,
    D: Dictionary<K, usize>,
{
    assert!(dict.is_empty());

    for (i, key) in keys.iter().enumerate() {
        let entry = dict.insert(key.clone(), i);
        assert_eq!(entry.key(), key);
        assert_eq!(dict.size(), i + 1);
    }

    for (i, key) in keys.iter().enumerate() {
        let entry = dict
            .find(key)
            .unwrap_or_else(|| panic!("key {key:?} lost after insertion"));
        assert_eq!(*entry.value(), i);
    }

    for (i, key) in keys.iter().enumerate() {
        let removed = dict
            .remove(key)
            .unwrap_or_else(|| panic!("key {key:?} missing at removal"));
        assert_eq!(removed.key(), key);
        assert_eq!(dict.size(), keys.len() - i - 1);
        assert!(dict.find(key).is_none(), "removed key {key:?} still found");
        assert!(dict.remove(key).is_none());
    }

    assert!(dict.is_empty());
}

/// Generates a standard insert/find/remove test for a dictionary implementation.
///
/// # Parameters
///
/// - `dict`: expression building an empty dictionary keyed by `key_type` with `usize` values.
/// - `key_type`: the key type to exercise.
/// - `params`: [`Generate`] parameters for producing the random keys.
///
/// # Example
///
/// ```ignore
/// generate_dictionary_tests!(
///     ChainedHashTable::<u64, usize>::new(),
///     u64,
///     NumParams::default(),
/// );
/// ```
///
/// [`Generate`]: crate::generate::Generate
#[macro_export]
macro_rules! generate_dictionary_tests {
    ($dict:expr, $key_type:ty, $params:expr$(,)?) => {
        compose_idents::compose_idents!(
            test_fn = concat(test_dictionary_insert_find_remove_, normalize($key_type)),
            {
                #[test]
                fn test_fn() {
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;
                    use $crate::generate::Generate;

                    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
                    let keys = <$key_type as Generate<ChaCha20Rng>>::generate_many(
                        &mut rng,
                        &$params,
                        500,
                    );
                    let mut dict = $dict;
                    $crate::dict::exercise_dictionary(&mut dict, &keys);
                }
            }
        );
    };
}
pub use generate_dictionary_tests;
