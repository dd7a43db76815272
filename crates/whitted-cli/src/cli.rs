use anyhow::Result;
use whitted::{
    camera::Camera,
    renderer::Renderer,
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::{FileOutput, FinalOutput},
    progress::PercentBar,
    Args,
};

pub struct Cli {
    pub renderer: Renderer,
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub show_progress: bool,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        let view_box = args.scene.view_box(args.dimensions.aspect_ratio());
        let camera = Camera::new(view_box, args.dimensions.width, args.dimensions.height)?;

        log::info!("loading scene {:?}", args.scene);
        let scene = args.scene.build()?;

        let renderer = Renderer::new(
            scene,
            camera,
            args.background.into(),
            args.integrator.build(args.depth),
        );

        Ok(Self {
            renderer,
            final_outputs: vec![Box::new(FileOutput {
                ldr_path: args.output,
                hdr_path: args.hdr,
            })],
            show_progress: !args.no_progress,
        })
    }

    pub fn run(self) -> Result<()> {
        let show_progress = self.show_progress;
        let image = timed_scope_log("Render", || {
            self.renderer.render(|percent| {
                if show_progress {
                    PercentBar {
                        percent,
                        width: 50,
                    }
                    .print();
                }
            })
        })
        .res;
        if show_progress {
            println!();
        }

        for final_output in self.final_outputs {
            final_output.commit(&image)?;
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
