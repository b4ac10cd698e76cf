use super::*;

const VIEWPORT_W: f64 = 1280.0;
const VIEWPORT_H: f64 = 720.0;

// =============================================================
// Defaults
// =============================================================

#[test]
fn camera_defaults_match_the_scene_constants() {
    let camera = Camera::default();
    assert_eq!(camera.x, 0.0);
    assert_eq!(camera.y, CAMERA_Y);
    assert_eq!(camera.z, CAMERA_Z);
    assert_eq!(camera.fov_deg, CAMERA_FOV_DEG);
}

#[test]
fn focal_length_follows_the_vertical_fov() {
    let camera = Camera::default();
    // h/2 over tan(30°) for a 60° vertical field of view.
    let expected = 300.0 / (30.0_f64.to_radians()).tan();
    assert!((camera.focal_px(600.0) - expected).abs() < 1e-9);
}

// =============================================================
// Projection
// =============================================================

#[test]
fn point_at_camera_height_projects_to_viewport_center() {
    let camera = Camera::default();
    let p = WorldPoint { x: 0.0, y: CAMERA_Y, z: 0.0 };
    let screen = camera.project(p, VIEWPORT_W, VIEWPORT_H).unwrap();
    assert_eq!(screen.x, VIEWPORT_W / 2.0);
    assert_eq!(screen.y, VIEWPORT_H / 2.0);
    assert!((screen.scale - camera.focal_px(VIEWPORT_H) / CAMERA_Z).abs() < 1e-12);
}

#[test]
fn points_below_camera_height_project_below_center() {
    let camera = Camera::default();
    let p = WorldPoint { x: 0.0, y: 0.0, z: 0.0 };
    let screen = camera.project(p, VIEWPORT_W, VIEWPORT_H).unwrap();
    assert!(screen.y > VIEWPORT_H / 2.0);
}

#[test]
fn points_at_or_behind_the_near_plane_are_culled() {
    let camera = Camera::default();
    for z in [CAMERA_Z, CAMERA_Z - 0.5, CAMERA_Z + 100.0] {
        let p = WorldPoint { x: 0.0, y: 0.0, z };
        assert!(camera.project(p, VIEWPORT_W, VIEWPORT_H).is_none(), "z = {z}");
    }
}

#[test]
fn points_beyond_the_far_plane_are_culled() {
    let camera = Camera::default();
    let p = WorldPoint { x: 0.0, y: 0.0, z: CAMERA_Z - CAMERA_FAR };
    assert!(camera.project(p, VIEWPORT_W, VIEWPORT_H).is_none());
}

#[test]
fn scale_attenuates_with_depth() {
    let camera = Camera::default();
    let near = camera
        .project(WorldPoint { x: 0.0, y: 0.0, z: 600.0 }, VIEWPORT_W, VIEWPORT_H)
        .unwrap();
    let far = camera
        .project(WorldPoint { x: 0.0, y: 0.0, z: -2000.0 }, VIEWPORT_W, VIEWPORT_H)
        .unwrap();
    assert!(near.scale > far.scale);
}

#[test]
fn projection_is_deterministic() {
    let camera = Camera::default();
    let p = WorldPoint { x: -730.0, y: 42.0, z: 180.0 };
    let first = camera.project(p, VIEWPORT_W, VIEWPORT_H);
    let second = camera.project(p, VIEWPORT_W, VIEWPORT_H);
    assert_eq!(first, second);
}

#[test]
fn lateral_offsets_are_symmetric_about_the_center() {
    let camera = Camera::default();
    let left = camera
        .project(WorldPoint { x: -500.0, y: 0.0, z: 0.0 }, VIEWPORT_W, VIEWPORT_H)
        .unwrap();
    let right = camera
        .project(WorldPoint { x: 500.0, y: 0.0, z: 0.0 }, VIEWPORT_W, VIEWPORT_H)
        .unwrap();
    assert!((left.x - VIEWPORT_W / 2.0 + (right.x - VIEWPORT_W / 2.0)).abs() < 1e-9);
    assert_eq!(left.y, right.y);
}
