//! Skeleton and Forward Kinematics Tests
//!
//! Tests for:
//! - World matrix propagation along chains and branches
//! - Rotation and scale inheritance
//! - Hierarchy validation (self-parent, double parent, cycles)
//! - Detaching, name lookup and renaming, driving joints from an animator

mod common;

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use kinema::animation::{Animation, AnimationLibrary, Animator, Channel, Keyframe};
use kinema::errors::KinemaError;
use kinema::scene::{Joint, Skeleton, Transform};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn unit_x(name: &str) -> Joint {
    Joint::new(name).with_position(Vec3::X)
}

// ============================================================================
// Propagation
// ============================================================================

#[test]
fn chain_accumulates_translation() {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(unit_x("root"));
    let a = skeleton.add_child(root, unit_x("a")).unwrap();
    let b = skeleton.add_child(a, unit_x("b")).unwrap();

    skeleton.solve_fk(root);

    assert!(vec3_approx(skeleton.world_position(root).unwrap(), Vec3::X));
    assert!(vec3_approx(skeleton.world_position(a).unwrap(), Vec3::new(2.0, 0.0, 0.0)));
    assert!(vec3_approx(skeleton.world_position(b).unwrap(), Vec3::new(3.0, 0.0, 0.0)));
}

#[test]
fn root_world_equals_local() {
    let mut skeleton = Skeleton::new();
    let pose_joint = Joint::new("root")
        .with_position(Vec3::new(1.0, 2.0, 3.0))
        .with_rotation(Quat::from_rotation_z(0.3))
        .with_scale(Vec3::splat(2.0));
    let expected = pose_joint.pose.local_matrix();
    let root = skeleton.add_joint(pose_joint);

    skeleton.solve_fk(root);
    assert!(skeleton.joint(root).unwrap().world_matrix().abs_diff_eq(expected, EPSILON));
}

#[test]
fn parent_rotation_swings_children() {
    let mut skeleton = Skeleton::new();
    let shoulder = skeleton
        .add_joint(Joint::new("shoulder").with_rotation_euler(Vec3::new(0.0, 0.0, 90.0)));
    let elbow = skeleton.add_child(shoulder, unit_x("elbow")).unwrap();
    let wrist = skeleton.add_child(elbow, unit_x("wrist")).unwrap();

    skeleton.solve_fk(shoulder);

    // A 90° turn about Z maps +X onto +Y.
    assert!(vec3_approx(skeleton.world_position(elbow).unwrap(), Vec3::Y));
    assert!(vec3_approx(skeleton.world_position(wrist).unwrap(), Vec3::new(0.0, 2.0, 0.0)));
}

#[test]
fn parent_scale_stretches_children() {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(Joint::new("root").with_scale(Vec3::splat(2.0)));
    let child = skeleton.add_child(root, unit_x("child")).unwrap();

    skeleton.solve_fk(root);
    assert!(vec3_approx(skeleton.world_position(child).unwrap(), Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn branches_are_solved_independently() {
    let mut skeleton = Skeleton::new();
    let hips = skeleton.add_joint(Joint::new("hips").with_position(Vec3::Y));
    let left = skeleton.add_child(hips, Joint::new("left").with_position(-Vec3::X)).unwrap();
    let right = skeleton.add_child(hips, Joint::new("right").with_position(Vec3::X)).unwrap();

    skeleton.solve_all();

    assert!(vec3_approx(skeleton.world_position(left).unwrap(), Vec3::new(-1.0, 1.0, 0.0)));
    assert!(vec3_approx(skeleton.world_position(right).unwrap(), Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn solving_a_subtree_uses_parent_world() {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(unit_x("root"));
    let a = skeleton.add_child(root, unit_x("a")).unwrap();
    let b = skeleton.add_child(a, unit_x("b")).unwrap();
    skeleton.solve_fk(root);

    skeleton.joint_mut(a).unwrap().pose.position = Vec3::new(0.0, 5.0, 0.0);
    skeleton.solve_fk(a);

    assert!(vec3_approx(skeleton.world_position(b).unwrap(), Vec3::new(2.0, 5.0, 0.0)));
}

#[test]
fn solve_unknown_handle_is_noop() {
    common::init_logging();
    let mut other = Skeleton::new();
    let foreign = other.add_joint(Joint::new("x"));

    let mut skeleton = Skeleton::new();
    skeleton.solve_fk(foreign);
    assert!(skeleton.is_empty());
}

// ============================================================================
// Hierarchy validation
// ============================================================================

#[test]
fn attach_rejects_self_parenting() {
    let mut skeleton = Skeleton::new();
    let j = skeleton.add_joint(Joint::new("j"));
    assert_eq!(skeleton.attach(j, j), Err(KinemaError::SelfParent(j)));
}

#[test]
fn attach_rejects_second_parent() {
    let mut skeleton = Skeleton::new();
    let a = skeleton.add_joint(Joint::new("a"));
    let b = skeleton.add_joint(Joint::new("b"));
    let c = skeleton.add_child(a, Joint::new("c")).unwrap();

    assert_eq!(
        skeleton.attach(b, c),
        Err(KinemaError::AlreadyParented { child: c, parent: a })
    );
}

#[test]
fn attach_rejects_cycles() {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(Joint::new("root"));
    let a = skeleton.add_child(root, Joint::new("a")).unwrap();
    let b = skeleton.add_child(a, Joint::new("b")).unwrap();

    assert_eq!(
        skeleton.attach(b, root),
        Err(KinemaError::CycleDetected { parent: b, child: root })
    );
    assert_eq!(skeleton.roots(), &[root]);
}

#[test]
fn attach_and_detach_move_roots() {
    let mut skeleton = Skeleton::new();
    let a = skeleton.add_joint(unit_x("a"));
    let b = skeleton.add_joint(unit_x("b"));
    assert_eq!(skeleton.roots().len(), 2);

    skeleton.attach(a, b).unwrap();
    assert_eq!(skeleton.roots(), &[a]);
    assert_eq!(skeleton.joint(b).unwrap().parent(), Some(a));
    assert_eq!(skeleton.joint(a).unwrap().children(), &[b]);

    skeleton.solve_all();
    assert!(vec3_approx(skeleton.world_position(b).unwrap(), Vec3::new(2.0, 0.0, 0.0)));

    skeleton.detach(b).unwrap();
    assert!(skeleton.joint(b).unwrap().is_root());
    assert!(skeleton.joint(a).unwrap().children().is_empty());
    assert_eq!(skeleton.roots().len(), 2);

    skeleton.solve_all();
    assert!(vec3_approx(skeleton.world_position(b).unwrap(), Vec3::X));
}

#[test]
fn find_by_name() {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(Joint::new("root"));
    let arm = skeleton.add_child(root, Joint::new("arm")).unwrap();

    assert_eq!(skeleton.find("arm"), Some(arm));
    assert_eq!(skeleton.find("leg"), None);
    assert_eq!(skeleton.len(), 2);
    assert_eq!(skeleton.iter().filter(|(_, j)| j.is_root()).count(), 1);
}

#[test]
fn rename_updates_name_lookup() {
    common::init_logging();
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint(Joint::new("root"));

    skeleton.rename(root, "pelvis").unwrap();

    assert_eq!(skeleton.find("pelvis"), Some(root));
    assert_eq!(skeleton.find("root"), None);
    assert_eq!(skeleton.joint(root).unwrap().name(), "pelvis");
}

#[test]
fn rename_keeps_a_newer_joint_with_the_old_name() {
    common::init_logging();
    let mut skeleton = Skeleton::new();
    let first = skeleton.add_joint(Joint::new("bone"));
    let second = skeleton.add_joint(Joint::new("bone"));
    assert_eq!(skeleton.find("bone"), Some(second));

    skeleton.rename(first, "spine").unwrap();

    assert_eq!(skeleton.find("bone"), Some(second));
    assert_eq!(skeleton.find("spine"), Some(first));
}

#[test]
fn rename_unknown_joint_fails() {
    let mut other = Skeleton::new();
    let foreign = other.add_joint(Joint::new("x"));

    let mut skeleton = Skeleton::new();
    assert_eq!(skeleton.rename(foreign, "y"), Err(KinemaError::JointNotFound(foreign)));
    assert_eq!(skeleton.find("y"), None);
}

#[test]
fn euler_rotation_takes_degrees() {
    let joint = Joint::new("j").with_rotation_euler(Vec3::new(0.0, 0.0, 90.0));
    let expected = Quat::from_rotation_z(FRAC_PI_2);
    assert!(joint.pose.rotation.angle_between(expected) < 1e-4);

    // Radians passed by mistake give a barely-turned joint.
    let mistaken = Joint::new("j").with_rotation_euler(Vec3::new(0.0, 0.0, FRAC_PI_2));
    assert!(mistaken.pose.rotation.angle_between(expected) > 1.0);
}

// ============================================================================
// Animated joints
// ============================================================================

#[test]
fn animator_output_drives_a_joint() {
    let mut library = AnimationLibrary::new();
    let swing = library.insert(Animation::from(vec![
        Keyframe::new(0.0, Vec3::ZERO),
        Keyframe::new(1.0, Vec3::new(0.0, 0.0, 180.0)),
    ]));

    let mut animator = Animator::new();
    animator.set_animation(swing, Channel::Rotation);
    animator.play();

    let mut skeleton = Skeleton::new();
    let shoulder = skeleton.add_joint(Joint::new("shoulder"));
    let hand = skeleton.add_child(shoulder, unit_x("hand")).unwrap();

    let pose: Transform = animator.update_animations(0.5, &mut library);
    skeleton.set_local_pose(shoulder, pose).unwrap();
    skeleton.solve_fk(shoulder);

    assert!(vec3_approx(skeleton.world_position(hand).unwrap(), Vec3::Y));
    let expected = Quat::from_rotation_z(FRAC_PI_2);
    assert!(skeleton.joint(shoulder).unwrap().pose.rotation.angle_between(expected) < 1e-4);
}
