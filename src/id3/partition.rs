use std::collections::HashMap;

use crate::Sample;


/// Partition the rows `indices` by the value of `attribute`.
/// One part is made per value present in `indices`,
/// in the order the values are first observed.
/// The order of rows inside each part follows `indices`.
pub fn partition<'a>(
    sample: &'a Sample,
    indices: Vec<usize>,
    attribute: usize,
) -> Vec<(&'a str, Vec<usize>)>
{
    let mut parts: Vec<(&'a str, Vec<usize>)> = Vec::new();
    let mut position: HashMap<&'a str, usize> = HashMap::new();

    for i in indices {
        let value = sample.value(i, attribute);
        let k = *position.entry(value)
            .or_insert_with(|| {
                parts.push((value, Vec::new()));
                parts.len() - 1
            });
        parts[k].1.push(i);
    }

    parts
}
