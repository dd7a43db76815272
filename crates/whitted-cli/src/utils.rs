use core::fmt::Display;

use clap::ValueEnum;
use whitted::{
    background::{Background, SkyBackground, UniformBackground},
    camera::ViewBox,
    color,
    integrators::{BasicIntegrator, Integrator, WhittedIntegrator},
    scene::{
        examples::{EmptyScene, ExampleScene, GlassScene, HallScene, SpheresScene},
        Scene,
    },
    ConfigError,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Spheres,
    Glass,
    Hall,
    Empty,
}

impl AvailableScene {
    pub fn build(self) -> Result<Scene, ConfigError> {
        match self {
            AvailableScene::Spheres => SpheresScene::build(),
            AvailableScene::Glass => GlassScene::build(),
            AvailableScene::Hall => HallScene::build(),
            AvailableScene::Empty => EmptyScene::build(),
        }
    }

    pub fn view_box(self, aspect_ratio: f32) -> ViewBox {
        match self {
            AvailableScene::Spheres => SpheresScene::view_box(aspect_ratio),
            AvailableScene::Glass => GlassScene::view_box(aspect_ratio),
            AvailableScene::Hall => HallScene::view_box(aspect_ratio),
            AvailableScene::Empty => EmptyScene::view_box(aspect_ratio),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum AvailableIntegrator {
    Basic,
    #[default]
    Whitted,
}

impl AvailableIntegrator {
    pub fn build(self, max_depth: u32) -> Box<dyn Integrator> {
        match self {
            AvailableIntegrator::Basic => Box::new(BasicIntegrator),
            AvailableIntegrator::Whitted => Box::new(WhittedIntegrator { max_depth }),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum AvailableBackground {
    #[default]
    Sky,
    Black,
}

impl From<AvailableBackground> for Box<dyn Background> {
    fn from(val: AvailableBackground) -> Self {
        match val {
            AvailableBackground::Sky => Box::<SkyBackground>::default(),
            AvailableBackground::Black => Box::new(UniformBackground(color::BLACK)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::Dimensions;

    #[test]
    fn parse_dimensions() {
        let d: Dimensions = "800x600".parse().unwrap();
        assert_eq!(
            d,
            Dimensions {
                width: 800,
                height: 600
            }
        );
        assert_eq!(d.to_string(), "800x600");

        assert!("800".parse::<Dimensions>().is_err());
        assert!("800x".parse::<Dimensions>().is_err());
        assert!("axb".parse::<Dimensions>().is_err());
        assert!("-3x4".parse::<Dimensions>().is_err());
    }
}
