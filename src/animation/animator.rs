use crate::animation::library::{AnimationKey, AnimationLibrary};
use crate::animation::settings::AnimatorSettings;
use crate::errors::KinemaError;
use crate::scene::transform::{Transform, euler_degrees_to_quat};

/// The transform component an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Keyframe values are a translation.
    Position = 1,
    /// Keyframe values are Euler angles in degrees.
    Rotation = 2,
    /// Keyframe values are per-axis scale factors.
    Scale = 3,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Position, Channel::Rotation, Channel::Scale];

    #[inline]
    fn slot(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Channel {
    type Error = KinemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Channel::Position),
            2 => Ok(Channel::Rotation),
            3 => Ok(Channel::Scale),
            other => Err(KinemaError::InvalidChannel(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not playing, cursor at 0.
    Stopped,
    Playing,
    /// Not playing, cursor kept where it was.
    Paused,
}

/// Plays up to three channel animations and composes them into a [`Transform`].
///
/// The animator only holds keys; the animations themselves live in an
/// [`AnimationLibrary`] that is passed to every update.
///
/// # Frame contract
///
/// Call [`update_animations`](Self::update_animations) once per frame with the
/// elapsed seconds. It advances the playback cursor (if playing), evaluates
/// every bound channel at the new time and then applies the end-of-timeline
/// policy:
///
/// - forward playback reaching the longest channel's duration wraps to 0 when
///   looping, otherwise stops on the final frame;
/// - reverse playback reaching 0 wraps to the duration when looping,
///   otherwise stops at 0.
#[derive(Debug, Clone)]
pub struct Animator {
    channels: [Option<AnimationKey>; 3],

    playing: bool,
    looping: bool,
    finished: bool,
    playback_speed: f32,
    playback_time: f32,
    /// Longest bound channel, refreshed on every update.
    maximal_duration: f32,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(AnimatorSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: AnimatorSettings) -> Self {
        Self {
            channels: [None; 3],
            playing: settings.autoplay,
            looping: settings.looping,
            finished: false,
            playback_speed: settings.playback_speed,
            playback_time: 0.0,
            maximal_duration: 0.0,
        }
    }

    // ========================================================================
    // Playback control
    // ========================================================================

    /// Starts playing from time 0.
    pub fn play(&mut self) {
        log::debug!("Animator play (speed {}, looping {})", self.playback_speed, self.looping);
        self.playing = true;
        self.finished = false;
        self.playback_time = 0.0;
    }

    /// Halts playback, keeping the cursor.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Halts playback and rewinds to 0.
    pub fn stop(&mut self) {
        self.playing = false;
        self.finished = false;
        self.playback_time = 0.0;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Moves the cursor without changing the play state. Negative times clamp to 0.
    pub fn seek(&mut self, time: f32) {
        self.playback_time = time.max(0.0);
        self.finished = false;
    }

    pub fn set_playback_speed(&mut self, speed: f32) {
        self.playback_speed = speed;
    }

    // ========================================================================
    // Channel binding
    // ========================================================================

    /// Binds `animation` to `channel`. Playback pauses so the new data is not
    /// entered mid-flight.
    pub fn set_animation(&mut self, animation: AnimationKey, channel: Channel) {
        self.playing = false;
        self.channels[channel.slot()] = Some(animation);
    }

    pub fn clear_animation(&mut self, channel: Channel) -> Option<AnimationKey> {
        self.channels[channel.slot()].take()
    }

    #[must_use]
    pub fn animation(&self, channel: Channel) -> Option<AnimationKey> {
        self.channels[channel.slot()]
    }

    // ========================================================================
    // State
    // ========================================================================

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.playing {
            PlaybackState::Playing
        } else if self.playback_time == 0.0 {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        }
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// `true` once a non-looping run has hit the end of its timeline.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    #[must_use]
    pub fn playback_speed(&self) -> f32 {
        self.playback_speed
    }

    #[inline]
    #[must_use]
    pub fn playback_time(&self) -> f32 {
        self.playback_time
    }

    /// Longest bound channel as of the last update.
    #[inline]
    #[must_use]
    pub fn maximal_duration(&self) -> f32 {
        self.maximal_duration
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Advances playback by `dt` seconds and returns the composed transform.
    ///
    /// Components without a usable channel (unbound, removed from the
    /// library, or fewer than two keyframes) stay at the identity.
    pub fn update_animations(&mut self, dt: f32, library: &mut AnimationLibrary) -> Transform {
        if self.playing {
            self.playback_time += dt * self.playback_speed;
        }

        let mut transform = Transform::IDENTITY;
        let mut maximal_duration = 0.0_f32;

        for channel in Channel::ALL {
            let Some(key) = self.channels[channel.slot()] else {
                continue;
            };
            let Some(animation) = library.get_mut(key) else {
                log::trace!("{channel:?} channel refers to a released animation");
                continue;
            };

            animation.update_duration();
            maximal_duration = maximal_duration.max(animation.duration());

            let Some(value) = animation.sample_sorted(self.playback_time) else {
                continue;
            };

            match channel {
                Channel::Position => transform.position = value,
                Channel::Rotation => transform.rotation = euler_degrees_to_quat(value),
                Channel::Scale => transform.scale = value,
            }
        }

        self.maximal_duration = maximal_duration;
        self.apply_end_policy();

        transform
    }

    fn apply_end_policy(&mut self) {
        if !self.playing {
            return;
        }

        if self.playback_speed >= 0.0 {
            if self.playback_time >= self.maximal_duration {
                if self.looping {
                    log::trace!("Animator wrapped at {}", self.maximal_duration);
                    self.playback_time = 0.0;
                } else {
                    self.finish(self.maximal_duration);
                }
            }
        } else if self.playback_time <= 0.0 {
            if self.looping {
                log::trace!("Animator wrapped to {}", self.maximal_duration);
                self.playback_time = self.maximal_duration;
            } else {
                self.finish(0.0);
            }
        }
    }

    fn finish(&mut self, at: f32) {
        log::debug!("Animator finished at {at}");
        self.playing = false;
        self.finished = true;
        self.playback_time = at;
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}
