use anyhow::Result;
use image::{buffer::ConvertBuffer, ImageBuffer, Rgb};
use prism::renderer::{Channel, OutputBuffers};
use std::path::{Path, PathBuf};

use crate::cli::FinalOutput;

pub struct FileOutput {
    pub hdr_outdir: Option<PathBuf>,
    pub ldr_outdir: Option<PathBuf>,
}

impl FileOutput {
    pub fn new(outdir: &Path) -> Self {
        Self {
            hdr_outdir: Some(outdir.join("hdr")),
            ldr_outdir: Some(outdir.join("ldr")),
        }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, frame: u32, output_buffers: &OutputBuffers) -> Result<()> {
        if let Some(ref hdr_output) = self.hdr_outdir {
            let convert_luma = ConvertBuffer::<ImageBuffer<Rgb<f32>, Vec<f32>>>::convert;
            std::fs::create_dir_all(hdr_output)?;

            log::info!("Saving HDR images in {}", hdr_output.display());
            for (name, buff) in output_buffers.channels() {
                let path = hdr_output.join(format!("{name}_{frame:04}.exr"));
                match buff {
                    Channel::Rgb(buff) => buff.save(path),
                    Channel::Luma(buff) => convert_luma(buff).save(path),
                }?
            }
        }
        if let Some(ref ldr_output) = self.ldr_outdir {
            let convert_rgb = ConvertBuffer::<ImageBuffer<Rgb<u8>, Vec<u8>>>::convert;
            let convert_luma = ConvertBuffer::<ImageBuffer<Rgb<u8>, Vec<u8>>>::convert;
            std::fs::create_dir_all(ldr_output)?;

            log::info!("Saving LDR images in {}", ldr_output.display());
            for (name, buff) in output_buffers.channels() {
                let path = ldr_output.join(format!("{name}_{frame:04}.png"));
                match buff {
                    Channel::Rgb(buff) => convert_rgb(buff).save(path),
                    Channel::Luma(buff) => convert_luma(buff).save(path),
                }?
            }
        }
        Ok(())
    }
}
