use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{buffer::ConvertBuffer, ImageBuffer, Rgb, Rgb32FImage};

use super::FinalOutput;

pub struct FileOutput {
    pub ldr_path: PathBuf,
    pub hdr_path: Option<PathBuf>,
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

impl FinalOutput for FileOutput {
    fn commit(&self, image: &Rgb32FImage) -> Result<()> {
        if let Some(ref hdr_path) = self.hdr_path {
            create_parent_dir(hdr_path)?;
            log::info!("Saving HDR image to {}", hdr_path.display());
            image.save(hdr_path)?;
        }

        let convert_rgb = ConvertBuffer::<ImageBuffer<Rgb<u8>, Vec<u8>>>::convert;
        create_parent_dir(&self.ldr_path)?;
        log::info!("Saving LDR image to {}", self.ldr_path.display());
        convert_rgb(image).save(&self.ldr_path)?;

        Ok(())
    }
}
