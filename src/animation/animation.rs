use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::keyframe::Keyframe;

/// The keyframes of a single channel.
///
/// Keyframes are stored in the order they were added; `pop_keyframe` and
/// `remove_keyframe` address that order. Evaluation walks a time-sorted view
/// that is rebuilt after every mutation. The sort is stable, so keyframes
/// sharing a timestamp keep their insertion order.
///
/// Serializes as a plain list of keyframes; the cached view is rebuilt on
/// load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Animation {
    keyframes: Vec<Keyframe>,
    /// Indices into `keyframes`, ascending by time.
    order: Vec<usize>,
    /// Largest keyframe time, 0 when empty.
    duration: f32,
}

impl Animation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        self.update_duration();
    }

    /// Appends all keyframes with a single re-sort.
    pub fn add_keyframes<I>(&mut self, keyframes: I)
    where
        I: IntoIterator<Item = Keyframe>,
    {
        self.keyframes.extend(keyframes);
        self.update_duration();
    }

    /// Removes the most recently added keyframe, regardless of its time.
    pub fn pop_keyframe(&mut self) -> Option<Keyframe> {
        let popped = self.keyframes.pop()?;
        self.update_duration();
        Some(popped)
    }

    /// Removes the keyframe at `index` (insertion order). Out of range is a no-op.
    pub fn remove_keyframe(&mut self, index: usize) -> Option<Keyframe> {
        if index >= self.keyframes.len() {
            log::trace!(
                "remove_keyframe: index {index} out of range ({} keyframes)",
                self.keyframes.len()
            );
            return None;
        }
        let removed = self.keyframes.remove(index);
        self.update_duration();
        Some(removed)
    }

    pub fn clear_keyframes(&mut self) {
        self.keyframes.clear();
        self.update_duration();
    }

    /// Keyframes in insertion order.
    #[inline]
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Keyframes in ascending time order.
    pub fn sorted_keyframes(&self) -> impl Iterator<Item = &Keyframe> + '_ {
        self.order.iter().map(|&i| &self.keyframes[i])
    }

    /// Mutable access for in-place editing.
    ///
    /// Changing `time` leaves the sorted view stale until the next
    /// [`update_duration`](Self::update_duration) or evaluation.
    pub fn keyframe_mut(&mut self, index: usize) -> Option<&mut Keyframe> {
        self.keyframes.get_mut(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Cached duration: the largest keyframe time.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Re-sorts the keyframes by time and recomputes the duration.
    pub fn update_duration(&mut self) {
        let keyframes = &self.keyframes;
        self.order.clear();
        self.order.extend(0..keyframes.len());
        self.order
            .sort_by(|&a, &b| keyframes[a].time.total_cmp(&keyframes[b].time));

        self.duration = keyframes.iter().map(|k| k.time).fold(0.0_f32, f32::max);
    }

    /// Evaluates the channel at `time`.
    ///
    /// Returns `None` with fewer than two keyframes. Before the first keyframe
    /// the first value is held, after the last keyframe the last value.
    pub fn sample(&mut self, time: f32) -> Option<Vec3> {
        self.update_duration();
        self.sample_sorted(time)
    }

    /// Evaluation against the cached sorted view.
    pub(crate) fn sample_sorted(&self, time: f32) -> Option<Vec3> {
        if self.keyframes.len() < 2 {
            return None;
        }

        let first = &self.keyframes[self.order[0]];
        let last = &self.keyframes[self.order[self.order.len() - 1]];

        // First keyframe strictly after `time`.
        let upper_pos = self
            .order
            .partition_point(|&i| self.keyframes[i].time <= time);

        if upper_pos == self.order.len() {
            return Some(last.value);
        }
        if upper_pos == 0 {
            return Some(first.value);
        }

        let lower = &self.keyframes[self.order[upper_pos - 1]];
        let upper = &self.keyframes[self.order[upper_pos]];

        let span = upper.time - lower.time;
        if span <= 0.0 {
            return Some(upper.value);
        }

        let t = (time - lower.time) / span;
        let eased = lower.ease(t);
        Some(lower.value + (upper.value - lower.value) * eased)
    }
}

impl From<Vec<Keyframe>> for Animation {
    fn from(keyframes: Vec<Keyframe>) -> Self {
        let mut animation = Self {
            keyframes,
            order: Vec::new(),
            duration: 0.0,
        };
        animation.update_duration();
        animation
    }
}

impl From<Animation> for Vec<Keyframe> {
    fn from(animation: Animation) -> Self {
        animation.keyframes
    }
}

impl FromIterator<Keyframe> for Animation {
    fn from_iter<I: IntoIterator<Item = Keyframe>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_view_is_stable_for_equal_times() {
        let mut anim = Animation::new();
        anim.add_keyframe(Keyframe::new(1.0, Vec3::X));
        anim.add_keyframe(Keyframe::new(0.0, Vec3::ZERO));
        anim.add_keyframe(Keyframe::new(1.0, Vec3::Y));

        let values: Vec<Vec3> = anim.sorted_keyframes().map(|k| k.value).collect();
        assert_eq!(values, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    }

    #[test]
    fn edit_through_keyframe_mut_is_picked_up_by_sample() {
        let mut anim: Animation = vec![
            Keyframe::new(0.0, Vec3::ZERO),
            Keyframe::new(1.0, Vec3::splat(10.0)),
        ]
        .into();

        if let Some(k) = anim.keyframe_mut(1) {
            k.time = 2.0;
        }
        let v = anim.sample(1.0).unwrap();
        assert!((v.x - 5.0).abs() < 1e-5);
        assert!((anim.duration() - 2.0).abs() < f32::EPSILON);
    }
}
