use approx::assert_abs_diff_eq;
use kinematic_box2d::*;

const SOLID: u32 = 0;
const SLOPE: u32 = 1;
const PLATFORM: u32 = 2;

fn unit_box() -> BoxConfig {
    BoxConfig::builder()
        .size(Vec2::ONE)
        .skin_width(0.1)
        .rays(4, 4)
        .build()
}

fn mask(layers: &[u32]) -> LayerMask {
    layers.iter().copied().collect()
}

fn slope_extension(max_slope_degrees: f32) -> SlopeExtension<LayerMask> {
    SlopeExtension::new(mask(&[SLOPE]), SlopeConfig { max_slope_degrees }).unwrap()
}

/// Adds a long segment at `degrees` above horizontal passing through `through`.
fn add_incline(scene: &mut Scene, through: Vec2, degrees: f32, layer: u32) {
    let dir = Vec2::from_angle(degrees.to_radians());
    scene.add_segment(through - dir, through + dir * 3.0, layer);
}

/// Runs the slope extension once; it never reports contacts of its own.
fn slide(
    extension: &SlopeExtension<LayerMask>,
    prober: &Prober<'_, LayerMask>,
    mut pos: Vec2,
    delta: Vec2,
) -> Vec2 {
    let mut state = CollisionState::NONE;
    extension.adjust(prober, &mut pos, delta, &mut state);
    assert_eq!(state, CollisionState::NONE);
    pos
}

// First right ray of a unit box with skin 0.1 at the origin starts at (0.4, -0.39).
const FIRST_RIGHT_RAY: Vec2 = Vec2::new(0.405, -0.39);

#[test]
fn walkable_slope_lifts_the_box() {
    let mut scene = Scene::new();
    add_incline(&mut scene, FIRST_RIGHT_RAY, 30.0, SLOPE);
    let geometry = BoxGeometry::new(unit_box()).unwrap();
    let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

    let mut pos = Vec2::ZERO;
    pos = slide(&slope_extension(45.0), &prober, pos, Vec2::new(0.2, 0.0));

    assert_abs_diff_eq!(pos.x, 0.2, epsilon = 1e-5);
    assert_abs_diff_eq!(pos.y, 30.0_f32.to_radians().tan() * 0.2, epsilon = 1e-4);
}

#[test]
fn slope_ignores_purely_vertical_moves() {
    let mut scene = Scene::new();
    add_incline(&mut scene, FIRST_RIGHT_RAY, 30.0, SLOPE);
    let geometry = BoxGeometry::new(unit_box()).unwrap();
    let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

    let mut pos = Vec2::new(0.0, -0.3);
    pos = slide(&slope_extension(45.0), &prober, pos, Vec2::new(0.0, -0.3));
    assert_eq!(pos, Vec2::new(0.0, -0.3));
}

#[test]
fn slope_ignores_geometry_outside_its_filter() {
    let mut scene = Scene::new();
    add_incline(&mut scene, FIRST_RIGHT_RAY, 30.0, SOLID);
    let geometry = BoxGeometry::new(unit_box()).unwrap();
    let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

    let mut pos = Vec2::ZERO;
    pos = slide(&slope_extension(45.0), &prober, pos, Vec2::new(0.2, 0.0));
    assert_eq!(pos, Vec2::ZERO);
}

#[test]
fn slope_rejects_surfaces_steeper_than_the_limit() {
    let mut scene = Scene::new();
    add_incline(&mut scene, FIRST_RIGHT_RAY, 60.0, SLOPE);
    let geometry = BoxGeometry::new(unit_box()).unwrap();
    let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

    let mut pos = Vec2::ZERO;
    pos = slide(&slope_extension(45.0), &prober, pos, Vec2::new(0.2, 0.0));
    assert_eq!(pos, Vec2::ZERO);

    pos = slide(&slope_extension(65.0), &prober, pos, Vec2::new(0.2, 0.0));
    assert!(pos.y > 0.3);
}

#[test]
fn slope_out_of_normal_reach_is_ignored() {
    let mut scene = Scene::new();
    // Within the move, but farther than the corner inset from the ray origin.
    add_incline(&mut scene, Vec2::new(0.5, -0.39), 30.0, SLOPE);
    let geometry = BoxGeometry::new(unit_box()).unwrap();
    let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

    let hit = prober.probe(Direction::Right, Vec2::new(0.2, 0.0), &mask(&[SLOPE]));
    assert!(hit.hit);
    assert_eq!(hit.normal, Vec2::ZERO);

    let mut pos = Vec2::ZERO;
    pos = slide(&slope_extension(45.0), &prober, pos, Vec2::new(0.2, 0.0));
    assert_eq!(pos, Vec2::ZERO);
}

#[test]
fn controller_walks_up_a_ramp() {
    let mut scene = Scene::new();
    scene.add_rect(Vec2::new(-5.0, -2.0), Vec2::new(1.0, -0.5), SOLID);
    scene.add_segment(Vec2::new(1.0, -0.5), Vec2::new(5.0, 3.5), SLOPE);

    let start = Vec2::new(0.5, -0.1);
    let mut controller = CharacterController2D::new(unit_box(), mask(&[SOLID, SLOPE]))
        .unwrap()
        .with_position(start)
        .with_extension(slope_extension(50.0));

    for _ in 0..10 {
        let pos = controller.update(&scene, Vec2::new(0.2, -0.05)).position;
        let foot = pos + Vec2::new(0.4, -0.4);
        if foot.x > 1.0 {
            let surface = foot.x - 1.5;
            assert!(foot.y >= surface - 0.1 - 1e-3, "foot {foot} sank into the ramp");
        }
    }

    let travelled = controller.position() - start;
    assert!(travelled.x > 1.0, "only moved {travelled}");
    assert!(travelled.y > 1.0, "only climbed {travelled}");
}

fn platform_scene() -> Scene {
    platform_scene_with_id().0
}

fn platform_scene_with_id() -> (Scene, ObjectId) {
    let mut scene = Scene::new();
    let platform = scene.add_segment(Vec2::new(-2.0, -1.0), Vec2::new(2.0, -1.0), PLATFORM);
    (scene, platform)
}

fn platform_controller(position: Vec2) -> CharacterController2D {
    CharacterController2D::new(unit_box(), mask(&[SOLID]))
        .unwrap()
        .with_position(position)
        .with_extension(PlatformExtension::new(mask(&[PLATFORM])))
}

#[test]
fn platform_catches_a_falling_box() {
    let (scene, platform) = platform_scene_with_id();
    let mut controller = platform_controller(Vec2::ZERO);

    let result = controller.update(&scene, Vec2::new(0.0, -2.0));
    assert_abs_diff_eq!(result.position.y, -1.0 + 0.4, epsilon = 1e-5);
    assert!(result.collisions.below.hit);
    assert_abs_diff_eq!(result.collisions.below.point.y, -1.0, epsilon = 1e-5);
    assert_eq!(result.collisions.below.object, Some(platform));
    assert!(controller.is_grounded());
}

#[test]
fn box_resting_on_platform_stays_grounded() {
    let scene = platform_scene();
    let mut controller = platform_controller(Vec2::ZERO);
    controller.update(&scene, Vec2::new(0.0, -2.0));

    for _ in 0..5 {
        let result = controller.update(&scene, Vec2::new(0.0, -0.5));
        assert_abs_diff_eq!(result.position.y, -0.6, epsilon = 1e-5);
        assert!(controller.is_grounded());
        assert!(result.collisions.below.hit);
    }

    // Jumping off clears the contact again.
    controller.update(&scene, Vec2::new(0.0, 1.0));
    assert!(!controller.is_grounded());
}

#[test]
fn platform_lets_the_box_jump_through() {
    let scene = platform_scene();
    let mut controller = platform_controller(Vec2::new(0.0, -1.5));

    let result = controller.update(&scene, Vec2::new(0.0, 2.0));
    assert_abs_diff_eq!(result.position.y, 0.5, epsilon = 1e-6);

    let result = controller.update(&scene, Vec2::new(1.0, 0.0));
    assert_eq!(result.position, Vec2::new(1.0, 0.5));
}

#[test]
fn platform_leaves_resting_box_alone() {
    let scene = platform_scene();
    let mut controller = platform_controller(Vec2::new(0.0, -0.6));

    let result = controller.update(&scene, Vec2::new(0.3, 0.0));
    assert_eq!(result.position, Vec2::new(0.3, -0.6));
}

struct Lift(f32);

impl MovementExtension<LayerMask> for Lift {
    fn name(&self) -> &str {
        "lift"
    }

    fn adjust(
        &self,
        _prober: &Prober<'_, LayerMask>,
        new_pos: &mut Vec2,
        _delta: Vec2,
        _state: &mut CollisionState,
    ) {
        new_pos.y += self.0;
    }
}

#[test]
fn extensions_run_in_registration_order() {
    let scene = platform_scene();

    let mut platform_last = platform_controller(Vec2::ZERO);
    platform_last.extensions_mut().insert(0, Lift(5.0));
    assert_eq!(platform_last.extensions().names(), vec!["lift", "platform"]);
    let y = platform_last.update(&scene, Vec2::new(0.0, -2.0)).position.y;
    assert_abs_diff_eq!(y, -0.6, epsilon = 1e-5);

    let mut lift_last = platform_controller(Vec2::ZERO).with_extension(Lift(5.0));
    assert_eq!(lift_last.extensions().names(), vec!["platform", "lift"]);
    let y = lift_last.update(&scene, Vec2::new(0.0, -2.0)).position.y;
    assert_abs_diff_eq!(y, 4.4, epsilon = 1e-5);
}
