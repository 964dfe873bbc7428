use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::channel,
    Arc,
};

use anyhow::{bail, Result};
use glam::Vec3;
use image::{ImageBuffer, Luma, Rgb, Rgb32FImage};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::{Camera, FlyCamera},
    color::{self, Color},
    integrators::Integrator,
    scene::Scene,
};

/// What an [Integrator] computes for a single camera ray
pub struct RayResult {
    pub normal: Vec3,
    pub albedo: Color,
    pub color: Color,
    /// Distance to the first hit, infinite if the ray escaped
    pub z: f32,
    /// Number of surfaces hit
    pub ray_depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRenderResult {
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub albedo: [f32; 3],
    pub z: f32,
    pub ray_depth: f32,
}

pub type LumaImage = ImageBuffer<Luma<f32>, Vec<f32>>;

pub struct OutputBuffers {
    pub color: Rgb32FImage,
    pub normal: Rgb32FImage,
    pub albedo: Rgb32FImage,
    pub depth: LumaImage,
    pub ray_depth: LumaImage,
}

pub enum Channel<'a> {
    Rgb(&'a Rgb32FImage),
    Luma(&'a LumaImage),
}

impl OutputBuffers {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color: ImageBuffer::new(width, height),
            normal: ImageBuffer::new(width, height),
            albedo: ImageBuffer::new(width, height),
            depth: ImageBuffer::new(width, height),
            ray_depth: ImageBuffer::new(width, height),
        }
    }

    /// All the buffers, with their names
    pub fn channels(&self) -> [(&'static str, Channel<'_>); 5] {
        [
            ("color", Channel::Rgb(&self.color)),
            ("normal", Channel::Rgb(&self.normal)),
            ("albedo", Channel::Rgb(&self.albedo)),
            ("depth", Channel::Luma(&self.depth)),
            ("ray_depth", Channel::Luma(&self.ray_depth)),
        ]
    }

    fn push_tile(&mut self, msg: &TileMsg) {
        for (index, (x, y)) in msg.pixels().enumerate() {
            let PixelRenderResult {
                color,
                normal,
                albedo,
                z,
                ray_depth,
            } = msg.data[index];

            *self.color.get_pixel_mut(x, y) = Rgb(color);
            *self.normal.get_pixel_mut(x, y) = Rgb(normal);
            *self.albedo.get_pixel_mut(x, y) = Rgb(albedo);
            *self.depth.get_pixel_mut(x, y) = Luma([z]);
            *self.ray_depth.get_pixel_mut(x, y) = Luma([ray_depth]);
        }
    }
}

/// A rendered rectangle of the image, pixels stored row by row
pub struct TileMsg {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub data: Vec<PixelRenderResult>,
}

impl TileMsg {
    /// Image coordinates of the pixels of `data`, in order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .cartesian_product(self.x..self.x + self.width)
            .map(|(y, x)| (x, y))
    }
}

/// Frame level cancellation: once cancelled, no more tile is started and the frame is dropped.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct RendererCreateInfo {
    pub width: u32,
    pub height: u32,
    pub camera: FlyCamera,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
    pub tile_size: u32,
    pub shuffle_tiles: bool,
}

/// Evaluates every pixel of one frame. Pixels only read the scene, so tiles are rendered in any order.
pub struct Renderer {
    pub camera: Camera,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
    pub tile_size: u32,
    pub shuffle_tiles: bool,
}

impl Renderer {
    pub fn new(info: RendererCreateInfo) -> Self {
        Self {
            camera: info.camera.camera(info.width, info.height),
            scene: info.scene,
            integrator: info.integrator,
            tile_size: info.tile_size.clamp(1, info.width.max(info.height).max(1)),
            shuffle_tiles: info.shuffle_tiles,
        }
    }

    pub fn process_pixel(&self, x: u32, y: u32) -> PixelRenderResult {
        let ray = self.camera.pixel_ray(x, y);
        let RayResult {
            normal,
            albedo,
            mut color,
            z,
            ray_depth,
        } = self.integrator.ray_cast(&self.scene, ray);

        if !color::is_finite(color) {
            crate::warn_once!("non finite color at pixel ({x}, {y}), replaced by black");
            color = color::BLACK;
        }

        PixelRenderResult {
            color: color.0,
            normal: normal.to_array(),
            albedo: albedo.0,
            z,
            ray_depth,
        }
    }

    /// Number of tiles along x and along y
    fn tile_grid(&self) -> (u32, u32) {
        (
            self.camera.width.div_ceil(self.tile_size),
            self.camera.height.div_ceil(self.tile_size),
        )
    }

    pub fn tile_count(&self) -> u32 {
        let (tile_count_x, tile_count_y) = self.tile_grid();
        tile_count_x * tile_count_y
    }

    fn render_tile(&self, tile_x: u32, tile_y: u32) -> TileMsg {
        let x = tile_x * self.tile_size;
        let y = tile_y * self.tile_size;
        let width = x.saturating_add(self.tile_size).min(self.camera.width) - x;
        let height = y.saturating_add(self.tile_size).min(self.camera.height) - y;

        let mut msg = TileMsg {
            x,
            y,
            width,
            height,
            data: Vec::with_capacity(width as usize * height as usize),
        };
        let data = msg.pixels().map(|(x, y)| self.process_pixel(x, y)).collect();
        msg.data = data;
        msg
    }

    /// Renders the whole frame on the rayon thread pool.
    ///
    /// `on_tile_rendered` is called on the calling thread for every finished tile.
    /// Fails if `cancel` is triggered before the last tile is started, the partial frame is discarded.
    pub fn run<F: FnMut(&TileMsg)>(
        &self,
        cancel: &CancelToken,
        mut on_tile_rendered: F,
    ) -> Result<OutputBuffers> {
        let width = self.camera.width;
        let height = self.camera.height;
        let (tile_count_x, tile_count_y) = self.tile_grid();

        let mut tiles = (0..tile_count_x)
            .cartesian_product(0..tile_count_y)
            .collect::<Vec<_>>();
        if self.shuffle_tiles {
            tiles.shuffle(&mut rand::thread_rng());
        }

        log::info!("Rendering {width}x{height} in {} tiles", tiles.len());
        let mut output_buffers = OutputBuffers::new(width, height);
        let (tx, rx) = channel();

        let generation_result = std::thread::scope(|s| {
            let producer = s.spawn(move || {
                tiles.into_par_iter().try_for_each_with(
                    tx,
                    |tx, (tile_x, tile_y)| -> Result<()> {
                        if cancel.is_cancelled() {
                            bail!("frame cancelled");
                        }
                        let msg = self.render_tile(tile_x, tile_y);
                        log::debug!("Tile {tile_x} {tile_y} done !");
                        tx.send(msg)?;
                        Ok(())
                    },
                )
            });

            // Ends when every sender is dropped, that is when the producer is done
            for msg in rx.iter() {
                output_buffers.push_tile(&msg);
                on_tile_rendered(&msg);
            }

            producer
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        });

        match generation_result {
            Ok(()) => {
                log::info!("Image fully generated");
                Ok(output_buffers)
            }
            Err(err) => {
                log::info!("Image generation interrupted: {err}");
                Err(err)
            }
        }
    }
}
