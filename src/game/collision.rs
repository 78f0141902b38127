//! Bounding-box collision between sprite groups.
//!
//! Entity counts are small (a few bullets against a few dozen aliens), so
//! this is a plain two-set scan with no spatial index.

use super::Sprite;

/// One bullet-side sprite and every target it destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub shooter: usize,
    pub targets: Vec<usize>,
}

/// Match `shooters` against `targets`, consuming both sides on contact.
///
/// Shooters are visited in order. Each one is tested against the targets not
/// yet consumed; if it overlaps any, it is consumed along with all of them.
/// A target therefore appears in at most one hit, and a shooter whose only
/// overlap was already consumed by an earlier shooter survives.
///
/// Returned indices refer to the slices as passed in.
pub fn group_collide<A: Sprite, B: Sprite>(shooters: &[A], targets: &[B]) -> Vec<Hit> {
    let mut consumed = vec![false; targets.len()];
    let mut hits = Vec::new();

    for (si, shooter) in shooters.iter().enumerate() {
        let rect = shooter.rect();
        let matched: Vec<usize> = targets
            .iter()
            .enumerate()
            .filter(|(ti, target)| !consumed[*ti] && rect.colliderect(&target.rect()))
            .map(|(ti, _)| ti)
            .collect();
        if matched.is_empty() {
            continue;
        }
        for &ti in &matched {
            consumed[ti] = true;
        }
        hits.push(Hit {
            shooter: si,
            targets: matched,
        });
    }
    hits
}

/// Drop every element whose index is listed.
pub fn remove_indices<T>(items: &mut Vec<T>, indices: impl IntoIterator<Item = usize>) {
    let mut doomed = vec![false; items.len()];
    for i in indices {
        if let Some(slot) = doomed.get_mut(i) {
            *slot = true;
        }
    }
    let mut i = 0;
    items.retain(|_| {
        let keep = !doomed[i];
        i += 1;
        keep
    });
}

/// Index of the first member of `group` overlapping `sprite`.
pub fn collide_any<A: Sprite, B: Sprite>(sprite: &A, group: &[B]) -> Option<usize> {
    let rect = sprite.rect();
    group.iter().position(|other| rect.colliderect(&other.rect()))
}
