mod file_output;

use anyhow::Result;
use image::Rgb32FImage;

pub use file_output::FileOutput;

pub trait FinalOutput {
    fn commit(&self, image: &Rgb32FImage) -> Result<()>;
}
