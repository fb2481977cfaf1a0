use slotmap::{SlotMap, new_key_type};

use crate::animation::animation::Animation;

new_key_type! {
    /// Stable handle to an [`Animation`] stored in an [`AnimationLibrary`].
    pub struct AnimationKey;
}

/// Owns every animation of a scene.
///
/// Animators refer to entries by [`AnimationKey`], so several animators can
/// share one channel. Dropping the library releases everything it holds; a
/// key that outlives its entry simply resolves to nothing.
#[derive(Debug, Default, Clone)]
pub struct AnimationLibrary {
    animations: SlotMap<AnimationKey, Animation>,
}

impl AnimationLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, animation: Animation) -> AnimationKey {
        self.animations.insert(animation)
    }

    pub fn remove(&mut self, key: AnimationKey) -> Option<Animation> {
        self.animations.remove(key)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: AnimationKey) -> Option<&Animation> {
        self.animations.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: AnimationKey) -> Option<&mut Animation> {
        self.animations.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: AnimationKey) -> bool {
        self.animations.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Releases every animation at once, e.g. on scene teardown.
    pub fn clear(&mut self) {
        log::debug!("Releasing {} animations", self.animations.len());
        self.animations.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimationKey, &Animation)> {
        self.animations.iter()
    }
}
