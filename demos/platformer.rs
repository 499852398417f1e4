use kinematic_box2d::*;

const SOLID: u32 = 0;
const SLOPE: u32 = 1;
const PLATFORM: u32 = 2;

fn level() -> Scene {
    let mut scene = Scene::new();
    scene.add_rect(Vec2::new(-10.0, -2.0), Vec2::new(2.0, -1.0), SOLID);
    scene.add_segment(Vec2::new(2.0, -1.0), Vec2::new(6.0, 1.0), SLOPE);
    scene.add_rect(Vec2::new(6.0, -2.0), Vec2::new(12.0, 1.0), SOLID);
    scene.add_rect(Vec2::new(12.0, -2.0), Vec2::new(13.0, 6.0), SOLID);
    scene.add_segment(Vec2::new(-4.0, 1.5), Vec2::new(0.0, 1.5), PLATFORM);
    scene
}

fn main() {
    let scene = level();
    let slope = SlopeExtension::new(
        LayerMask::from_layers([SLOPE]),
        SlopeConfig {
            max_slope_degrees: 40.0,
        },
    )
    .expect("valid slope limit");

    let mut player = CharacterController2D::new(
        BoxConfig::builder()
            .size(Vec2::new(0.8, 1.6))
            .skin_width(0.02)
            .rays(5, 3)
            .build(),
        LayerMask::from_layers([SOLID, SLOPE]),
    )
    .expect("valid box")
    .with_position(Vec2::new(-3.0, 3.0))
    .with_extension(slope)
    .with_extension(PlatformExtension::new(LayerMask::from_layers([PLATFORM])));

    let gravity = -20.0;
    let run_speed = 4.0;
    let dt = 1.0 / 60.0;
    let mut vertical_speed = 0.0_f32;

    for frame in 0..360 {
        vertical_speed += gravity * dt;
        let delta = Vec2::new(run_speed * dt, vertical_speed * dt);
        let result = player.update(&scene, delta);

        if player.is_grounded() {
            vertical_speed = 0.0;
        }

        if frame % 30 == 0 {
            println!(
                "frame {frame:3}: position {:.3} | {}",
                result.position, result.collisions
            );
        }
    }
}
