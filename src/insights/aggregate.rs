//! Group-by helpers shared by the aggregation stages.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::warn;

use crate::models::RentalRecord;

/// Arithmetic mean, or `None` for an empty input or a sum that does not fit
/// in a `Decimal`.
pub(crate) fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let (sum, count) = values
        .into_iter()
        .try_fold((Decimal::ZERO, 0u64), |(sum, count), v| {
            Some((sum.checked_add(v)?, count + 1))
        })
        .or_else(|| {
            warn!("Sum overflowed while averaging");
            None
        })?;
    if count == 0 {
        return None;
    }
    sum.checked_div(Decimal::from(count))
}

/// Groups `records` by `key`, averages `value` per group and returns the
/// `limit` groups with the highest mean.
///
/// Groups keep first-encountered order before a stable sort, so equal means
/// rank in input order. Returns `None` if a group's sum overflows.
pub(crate) fn top_groups_by_mean<K, FK, FV>(
    records: &[&RentalRecord],
    key: FK,
    value: FV,
    limit: usize,
) -> Option<Vec<(K, Decimal)>>
where
    K: Eq + Hash + Clone,
    FK: Fn(&RentalRecord) -> K,
    FV: Fn(&RentalRecord) -> Decimal,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Decimal, u64)> = Vec::new();

    for record in records {
        let k = key(*record);
        let v = value(*record);
        match positions.get(&k) {
            Some(&i) => {
                let Some(sum) = groups[i].1.checked_add(v) else {
                    warn!(records = records.len(), "Group sum overflowed while ranking");
                    return None;
                };
                groups[i].1 = sum;
                groups[i].2 += 1;
            }
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, v, 1));
            }
        }
    }

    let mut means: Vec<(K, Decimal)> = groups
        .into_iter()
        .map(|(k, sum, count)| Some((k, sum.checked_div(Decimal::from(count))?)))
        .collect::<Option<_>>()?;
    means.sort_by(|a, b| b.1.cmp(&a.1));
    means.truncate(limit);
    Some(means)
}
