use super::*;
use approx::assert_relative_eq;
use clap::Parser;
use glam::Vec3;

fn scene() -> Scene {
    Scene::new(Camera::new(Vec3::new(0.0, 2.5, 3.0), 800.0 / 600.0))
}

fn tap(scene: &mut Scene, key: KeyCode) {
    scene.process_keyboard(key, true);
    scene.process_keyboard(key, false);
}

fn fan_blades(scene: &Scene) -> Vec<glam::Mat4> {
    scene
        .draw_list()
        .into_iter()
        .filter(|draw| draw.mesh == MeshKind::FanBlade)
        .map(|draw| draw.model)
        .collect()
}

#[test]
fn test_key_bindings() {
    assert_eq!(key_binding(KeyCode::KeyW), Some(Binding::Move(CameraMovement::Forward)));
    assert_eq!(key_binding(KeyCode::KeyR), Some(Binding::Move(CameraMovement::Down)));
    assert_eq!(key_binding(KeyCode::KeyY), Some(Binding::Move(CameraMovement::YawLeft)));
    assert_eq!(key_binding(KeyCode::KeyQ), Some(Binding::Move(CameraMovement::RollRight)));
    assert_eq!(key_binding(KeyCode::KeyG), Some(Binding::ToggleFan));
    assert_eq!(key_binding(KeyCode::KeyF), Some(Binding::ToggleOrbit));
    assert_eq!(key_binding(KeyCode::KeyP), None);
    assert_eq!(key_binding(KeyCode::Escape), None);
}

#[test]
fn test_every_movement_has_a_key() {
    let bound: Vec<_> = [
        KeyCode::KeyW,
        KeyCode::KeyS,
        KeyCode::KeyA,
        KeyCode::KeyD,
        KeyCode::KeyE,
        KeyCode::KeyR,
        KeyCode::KeyX,
        KeyCode::KeyC,
        KeyCode::KeyY,
        KeyCode::KeyV,
        KeyCode::KeyZ,
        KeyCode::KeyQ,
    ]
    .into_iter()
    .filter_map(key_binding)
    .collect();

    for movement in CameraMovement::ALL {
        assert!(bound.contains(&Binding::Move(movement)), "{:?} unbound", movement);
    }
}

#[test]
fn test_held_key_moves_camera() {
    let mut scene = scene();
    scene.process_keyboard(KeyCode::KeyW, true);
    scene.advance(1.0);
    assert_relative_eq!(scene.camera.position.z, 0.5, epsilon = 1e-4);

    scene.process_keyboard(KeyCode::KeyW, false);
    scene.advance(1.0);
    assert_relative_eq!(scene.camera.position.z, 0.5, epsilon = 1e-4);
}

#[test_log::test]
fn test_fan_toggle_fires_once_per_press() {
    let mut scene = scene();

    // Auto-repeat delivers several presses before the release.
    scene.process_keyboard(KeyCode::KeyG, true);
    scene.process_keyboard(KeyCode::KeyG, true);
    scene.process_keyboard(KeyCode::KeyG, true);
    assert!(scene.fan.enabled);

    scene.process_keyboard(KeyCode::KeyG, false);
    assert!(scene.fan.enabled);

    tap(&mut scene, KeyCode::KeyG);
    assert!(!scene.fan.enabled);
}

#[test_log::test]
fn test_fan_resumes_from_last_angle() {
    let mut scene = scene();
    let still = fan_blades(&scene);

    tap(&mut scene, KeyCode::KeyG);
    for _ in 0..4 {
        scene.advance(0.016);
    }
    assert_relative_eq!(scene.fan.angle(), 20.0);
    let spun = fan_blades(&scene);
    assert_ne!(still, spun);

    tap(&mut scene, KeyCode::KeyG);
    scene.advance(0.016);
    assert_relative_eq!(scene.fan.angle(), 20.0);
    assert_eq!(fan_blades(&scene), spun);

    tap(&mut scene, KeyCode::KeyG);
    scene.advance(0.016);
    assert_relative_eq!(scene.fan.angle(), 25.0);
}

#[test_log::test]
fn test_orbit_turns_by_fixed_step_until_toggled() {
    let mut scene = scene();
    let target = scene.camera.target();

    tap(&mut scene, KeyCode::KeyF);
    assert!(scene.is_orbiting());

    scene.advance(0.001);
    scene.advance(0.5);
    assert_relative_eq!(scene.camera.yaw(), camera::DEFAULT_YAW - 2.0 * camera::DEFAULT_ORBIT_STEP, epsilon = 1e-4);
    assert_relative_eq!(scene.camera.target().x, target.x, epsilon = 1e-4);
    assert_relative_eq!(scene.camera.target().z, target.z, epsilon = 1e-4);

    tap(&mut scene, KeyCode::KeyF);
    assert!(!scene.is_orbiting());
    let yaw = scene.camera.yaw();
    scene.advance(0.016);
    assert_eq!(scene.camera.yaw(), yaw);
}

#[test]
fn test_release_keys_stops_movement() {
    let mut scene = scene();
    scene.process_keyboard(KeyCode::KeyD, true);
    scene.process_keyboard(KeyCode::KeyG, true);
    scene.release_keys();

    let position = scene.camera.position;
    scene.advance(1.0);
    assert_eq!(scene.camera.position, position);

    // The toggle key counts as released too.
    scene.process_keyboard(KeyCode::KeyG, true);
    assert!(!scene.fan.enabled);
}

#[test]
fn test_mouse_and_scroll() {
    let mut scene = scene();
    scene.process_mouse(100.0, 50.0);
    assert_relative_eq!(scene.camera.yaw(), -80.0, epsilon = 1e-4);
    assert_relative_eq!(scene.camera.pitch(), 5.0, epsilon = 1e-4);

    scene.process_scroll(5.0);
    assert_relative_eq!(scene.camera.zoom(), 40.0);
}

#[test]
fn test_resize() {
    let mut scene = scene();
    scene.resize(1600, 900);
    assert_relative_eq!(scene.camera.aspect, 1600.0 / 900.0);

    // Minimized windows report a zero size.
    scene.resize(0, 900);
    assert_relative_eq!(scene.camera.aspect, 1600.0 / 900.0);
}

#[test]
fn test_from_config() {
    let config = Config::try_parse_from([
        "cafe-scene",
        "--eye",
        "1,2,3",
        "--yaw",
        "0",
        "--pitch",
        "120",
        "--speed",
        "4",
        "--fan-step",
        "10",
        "--fan",
        "--orbit",
    ])
    .unwrap();
    let mut scene = Scene::from_config(&config, 2.0);

    assert_eq!(scene.camera.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(scene.camera.yaw(), 0.0);
    assert_eq!(scene.camera.pitch(), camera::PITCH_LIMIT);
    assert_eq!(scene.camera.movement_speed, 4.0);
    assert_eq!(scene.camera.aspect, 2.0);
    assert!(scene.fan.enabled);
    assert!(scene.is_orbiting());

    scene.advance(0.016);
    assert_relative_eq!(scene.fan.angle(), 10.0);
}

#[test]
fn test_default_config_matches_scene_defaults() {
    let scene = Scene::from_config(&Config::default(), 1.0);
    assert_eq!(scene.camera.position, Vec3::new(0.0, 2.5, 3.0));
    assert_eq!(scene.camera.yaw(), camera::DEFAULT_YAW);
    assert_eq!(scene.camera.mouse_sensitivity, camera::DEFAULT_SENSITIVITY);
    assert_eq!(scene.fan.step, fan::DEFAULT_FAN_STEP);
    assert!(!scene.fan.enabled);
    assert!(!scene.is_orbiting());
    assert_eq!(scene.draw_list().len(), script::draw_count());
}
