//! Small shared rules used by ranks, level unlocks and trophies.

/// Index of the highest tier whose threshold is met by `value`.
///
/// `tiers` must be sorted ascending by threshold. The scan runs from the top
/// tier down and stops at the first match, so equal thresholds resolve to the
/// later tier.
pub fn threshold_index<T>(tiers: &[T], value: u32, threshold: impl Fn(&T) -> u32) -> Option<usize> {
    tiers.iter().rposition(|tier| value >= threshold(tier))
}

/// Push `item` unless it is already present. Returns true if it was added.
///
/// Existing entries keep their order.
pub fn append_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}
