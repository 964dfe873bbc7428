use std::collections::HashSet;

use anyhow::Result;
use prism::{
    camera::FlyCamera,
    integrators::WhittedIntegrator,
    renderer::{CancelToken, OutputBuffers, Renderer, RendererCreateInfo},
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::FileOutput,
    progress::Progress,
    utils::{AvailableOutput, AvailableScene, Keys, Pair},
    Args,
};

pub trait FinalOutput {
    fn commit(&self, frame: u32, output_buffers: &OutputBuffers) -> Result<()>;
}

/// Offline host loop: updates the camera and the time, then renders, once per frame
pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub args: CliOptions,
    pub camera: FlyCamera,
}

pub struct CliOptions {
    pub width: u32,
    pub height: u32,
    pub scene: AvailableScene,
    pub time: f32,
    pub frames: u32,
    pub fps: f32,
    pub keys: Keys,
    pub turn: Pair,
    pub max_depth: u32,
    pub tile_size: u32,
    pub shuffle_tiles: bool,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if args.no_threads {
            log::warn!("Working on only one thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()?;
        }

        let mut outputs: HashSet<AvailableOutput> = HashSet::from_iter(args.output);
        if outputs.is_empty() {
            outputs.insert(AvailableOutput::default());
        }

        let mut final_outputs: Vec<Box<dyn FinalOutput>> = Vec::new();
        for o in outputs {
            match o {
                AvailableOutput::File => {
                    final_outputs.push(Box::new(FileOutput::new(&args.output_dir)));
                }
            }
        }

        let mut camera = FlyCamera {
            position: args.position.0,
            yaw: args.yaw,
            ..Default::default()
        };
        // Goes through the mouse path to get the pitch clamped
        camera.process_mouse(0.0, args.pitch / camera.sensitivity);

        Ok(Self {
            final_outputs,
            args: CliOptions {
                width: args.dimensions.width,
                height: args.dimensions.height,
                scene: args.scene,
                time: args.time,
                frames: args.frames,
                fps: args.fps,
                keys: args.keys,
                turn: args.turn,
                max_depth: args.max_depth,
                tile_size: args.tile_size,
                shuffle_tiles: args.shuffle_tiles,
            },
            camera,
        })
    }

    fn frame_time(&self, frame: u32) -> f32 {
        if self.args.fps > 0.0 {
            self.args.time + frame as f32 / self.args.fps
        } else {
            self.args.time
        }
    }

    fn update_camera(&mut self, frame: u32) {
        if let Some(movement) = self.args.keys.at_frame(frame) {
            self.camera.process_movement(movement);
        }
        let [dx, dy] = self.args.turn.0;
        self.camera.process_mouse(dx, dy);
    }

    pub fn run(mut self) -> Result<()> {
        let cancel = CancelToken::default();

        for frame in 0..self.args.frames {
            if frame > 0 {
                self.update_camera(frame);
            }
            let time = self.frame_time(frame);
            log::info!(
                "Frame {frame}: t = {time:.3}s, camera at {} looking toward {}",
                self.camera.position,
                self.camera.direction()
            );

            let renderer = Renderer::new(RendererCreateInfo {
                width: self.args.width,
                height: self.args.height,
                camera: self.camera,
                scene: self.args.scene.build(time),
                integrator: Box::new(WhittedIntegrator {
                    max_depth: self.args.max_depth,
                }),
                tile_size: self.args.tile_size,
                shuffle_tiles: self.args.shuffle_tiles,
            });

            let progress = Progress::new(renderer.tile_count() as usize);
            let output_buffers = timed_scope_log("Render frame", || {
                renderer.run(&cancel, |_| {
                    progress.inc();
                    progress.print();
                })
            })
            .res?;

            for final_output in &self.final_outputs {
                final_output.commit(frame, &output_buffers)?;
            }
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
