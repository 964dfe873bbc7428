use glam::Vec3;
use prism::{
    camera::FlyCamera,
    integrators::WhittedIntegrator,
    renderer::{CancelToken, PixelRenderResult, Renderer, RendererCreateInfo},
    scene::{
        examples::{DebugScene, RingScene},
        Scene,
    },
};

fn renderer(scene: Scene, width: u32, height: u32, tile_size: u32) -> Renderer {
    Renderer::new(RendererCreateInfo {
        width,
        height,
        camera: FlyCamera::default(),
        scene,
        integrator: Box::new(WhittedIntegrator::default()),
        tile_size,
        shuffle_tiles: true,
    })
}

#[test]
fn parallel_render_matches_pixel_by_pixel() {
    let renderer = renderer(RingScene { time: 0.5 }.into(), 37, 23, 8);

    let mut tiles = 0;
    let output = renderer
        .run(&CancelToken::default(), |_| tiles += 1)
        .expect("render should not fail");
    assert_eq!(tiles, renderer.tile_count());
    assert_eq!(tiles, 5 * 3);

    for y in 0..23 {
        for x in 0..37 {
            let PixelRenderResult {
                color, z, ray_depth, ..
            } = renderer.process_pixel(x, y);
            assert_eq!(output.color.get_pixel(x, y).0, color, "pixel ({x}, {y})");
            assert_eq!(output.depth.get_pixel(x, y).0, [z]);
            assert_eq!(output.ray_depth.get_pixel(x, y).0, [ray_depth]);
        }
    }
}

#[test]
fn frames_are_reproducible() {
    let a = renderer(DebugScene.into(), 16, 16, 4)
        .run(&CancelToken::default(), |_| ())
        .unwrap();
    let b = renderer(DebugScene.into(), 16, 16, 16)
        .run(&CancelToken::default(), |_| ())
        .unwrap();
    assert_eq!(a.color, b.color);
    assert_eq!(a.normal, b.normal);
}

#[test]
fn oversized_tiles_cover_the_frame_once() {
    let renderer = renderer(DebugScene.into(), 37, 23, u32::MAX);
    assert_eq!(renderer.tile_count(), 1);

    let mut pixels = 0;
    renderer
        .run(&CancelToken::default(), |tile| pixels += tile.data.len())
        .expect("render should not fail");
    assert_eq!(pixels, 37 * 23);
}

#[test]
fn cancelled_frame_is_discarded() {
    let renderer = renderer(RingScene { time: 0.0 }.into(), 32, 32, 8);
    let cancel = CancelToken::default();
    cancel.cancel();

    let mut tiles = 0;
    let result = renderer.run(&cancel, |_| tiles += 1);
    assert!(result.is_err());
    assert_eq!(tiles, 0);
}

#[test]
fn looking_at_the_red_sphere() {
    let camera = FlyCamera {
        position: Vec3::new(-1.5, 0.0, 0.0),
        ..Default::default()
    };
    let renderer = Renderer::new(RendererCreateInfo {
        width: 9,
        height: 9,
        camera,
        scene: RingScene { time: 0.0 }.into(),
        integrator: Box::new(WhittedIntegrator::default()),
        tile_size: 32,
        shuffle_tiles: false,
    });

    let center = renderer.process_pixel(4, 4);
    // Red sphere of radius 1 centered 5 units ahead
    assert!((center.z - 4.0).abs() < 1e-3, "{center:?}");
    assert_eq!(center.albedo, [1.0, 0.0, 0.0]);
    assert!(center.ray_depth >= 1.0);
    assert!(center.color.iter().all(|c| c.is_finite() && *c >= 0.0));
}
