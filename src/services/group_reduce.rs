use std::collections::BTreeMap;

/// Partition `items` by `key_fn` and fold each partition.
///
/// `init` builds the accumulator from the first item of a partition, `fold`
/// merges every further item into it. Keys come back in ascending order.
/// Fails fast with the first error returned by `key_fn`.
pub fn group_reduce<I, T, K, V, E>(
    items: I,
    mut key_fn: impl FnMut(&T) -> Result<K, E>,
    mut init: impl FnMut(T) -> V,
    mut fold: impl FnMut(&mut V, T),
) -> Result<BTreeMap<K, V>, E>
where
    I: IntoIterator<Item = T>,
    K: Ord,
{
    let mut groups: BTreeMap<K, V> = BTreeMap::new();

    for item in items {
        let key = key_fn(&item)?;
        match groups.get_mut(&key) {
            Some(acc) => fold(acc, item),
            None => {
                groups.insert(key, init(item));
            }
        }
    }

    Ok(groups)
}
