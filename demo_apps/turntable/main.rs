//! Turntable demo
//!
//! Stands in for a render loop: advances a keyframed object and a three-bone
//! arm at a fixed 60 Hz step and logs what a renderer would upload.
//!
//! ```text
//! RUST_LOG=debug cargo run -p turntable -- [settings.json]
//! ```
//!
//! The optional settings file is an `AnimatorSettings` JSON object, e.g.
//! `{ "playback_speed": -1.0, "looping": true }`.

use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use kinema::animation::{
    Animation, AnimationLibrary, Animator, AnimatorSettings, Channel, EasingStyle, Keyframe,
};
use kinema::scene::{Joint, Skeleton};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: usize = 240;

fn load_settings(path: Option<&Path>) -> anyhow::Result<AnimatorSettings> {
    let Some(path) = path else {
        return Ok(AnimatorSettings {
            looping: true,
            autoplay: true,
            ..Default::default()
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    Ok(settings)
}

fn build_channels(library: &mut AnimationLibrary, animator: &mut Animator) {
    let hop = library.insert(Animation::from(vec![
        Keyframe::new(0.0, Vec3::ZERO).with_easing(EasingStyle::Quadratic, false),
        Keyframe::new(1.0, Vec3::new(0.0, 2.0, 0.0)).with_easing(EasingStyle::Quadratic, true),
        Keyframe::new(2.0, Vec3::ZERO),
    ]));

    let spin = library.insert(Animation::from(vec![
        Keyframe::new(0.0, Vec3::ZERO).with_easing(EasingStyle::Back, false),
        Keyframe::new(2.0, Vec3::new(0.0, 360.0, 0.0)),
    ]));

    let squash = library.insert(Animation::from(vec![
        Keyframe::new(0.0, Vec3::ONE).with_easing(EasingStyle::Elastic, false),
        Keyframe::new(1.5, Vec3::new(1.2, 0.8, 1.2)),
        Keyframe::new(2.0, Vec3::ONE),
    ]));

    animator.set_animation(hop, Channel::Position);
    animator.set_animation(spin, Channel::Rotation);
    animator.set_animation(squash, Channel::Scale);
}

fn build_arm(skeleton: &mut Skeleton) -> anyhow::Result<()> {
    let shoulder =
        skeleton.add_joint(Joint::new("shoulder").with_position(Vec3::new(0.0, 1.5, 0.0)));
    let elbow = skeleton.add_child(shoulder, Joint::new("elbow").with_position(Vec3::X))?;
    skeleton.add_child(elbow, Joint::new("wrist").with_position(Vec3::X))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args().nth(1);
    let settings = load_settings(settings_path.as_deref().map(Path::new))?;
    log::info!("Animator settings: {settings:?}");

    let mut library = AnimationLibrary::new();
    let mut animator = Animator::with_settings(settings);
    build_channels(&mut library, &mut animator);
    // Binding pauses playback; restart for autoplay.
    if settings.autoplay {
        animator.play();
    }

    let mut skeleton = Skeleton::new();
    build_arm(&mut skeleton)?;
    let shoulder = skeleton.find("shoulder").context("arm has a shoulder")?;
    let wrist = skeleton.find("wrist").context("arm has a wrist")?;

    for frame in 0..FRAMES {
        let transform = animator.update_animations(FRAME_DT, &mut library);

        let mut arm_pose = skeleton
            .joint(shoulder)
            .map(|j| j.pose)
            .unwrap_or_default();
        arm_pose.rotation = transform.rotation;
        skeleton.set_local_pose(shoulder, arm_pose)?;
        skeleton.solve_all();

        if frame % 30 == 0 {
            log::info!(
                "frame {frame:3} t={:.3}s pos={:.3} rot={:.1} scale={:.3} wrist={:.3}",
                animator.playback_time(),
                transform.position,
                transform.rotation_euler_degrees(),
                transform.scale,
                skeleton.world_position(wrist).unwrap_or_default(),
            );
        }
    }

    log::info!(
        "Done after {FRAMES} frames (state {:?}, finished {})",
        animator.state(),
        animator.is_finished()
    );
    library.clear();
    Ok(())
}
