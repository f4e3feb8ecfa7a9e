//! End-to-end driver: configuration in, geometry and draw commands out.
//!
//! All geometry is computed before the first draw command is emitted, so a
//! failing run produces no output at all.
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DemoConfig;
use crate::iteration::{iterate, IterationRun};
use crate::math::Vector;
use crate::render::{draw_run, CommandList, DrawCommand, SvgCanvas};
use crate::transform::{random_points, rectangle, AffineMap};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct DemoOutput {
    pub map: AffineMap,
    pub run: IterationRun,
    pub commands: Vec<DrawCommand>,
}

impl DemoOutput {
    /// Replay the recorded commands onto an SVG canvas.
    pub fn to_svg(&self, config: &DemoConfig) -> SvgCanvas {
        let mut canvas = SvgCanvas::new(config.surface(), config.canvas.background);
        crate::render::replay(&self.commands, &mut canvas);
        canvas
    }
}

/// `StdRng` from `seed`, or from OS entropy when there is none.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// The fixed point followed by `total_steps - 1` random points.
pub fn starting_points<R: Rng + ?Sized>(config: &DemoConfig, rng: &mut R) -> Vec<Vector> {
    let mut points = vec![Vector::from(config.fixed_point)];
    points.extend(random_points(
        rng,
        config.total_steps.saturating_sub(1),
        config.init_size,
        config.init_size,
    ));
    points
}

/// Run the demo with an explicit random source.
pub fn run_with_rng<R: Rng + ?Sized>(config: &DemoConfig, rng: &mut R) -> Result<DemoOutput> {
    config.validate()?;
    let map = config
        .affine_map()
        .context("Failed to build the affine map")?;

    let figure = rectangle(config.init_size, config.init_size);
    let points = starting_points(config, rng);
    log::debug!("starting points: {:?}", points);

    let run = iterate(&map, figure, points, config.total_steps)
        .context("Failed to iterate the affine map")?;
    for (step, figure) in run.frames().iter().enumerate() {
        log::info!(
            "frame {}: [{}]",
            step,
            figure
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let mut sink = CommandList::new();
    draw_run(&run, &config.scene_style(), &mut sink);
    log::debug!("Emitted {} draw commands", sink.len());

    Ok(DemoOutput {
        map,
        run,
        commands: sink.into_commands(),
    })
}

/// Run the demo, seeding the random points from `config.seed`.
pub fn run(config: &DemoConfig) -> Result<DemoOutput> {
    let mut rng = make_rng(config.seed);
    run_with_rng(config, &mut rng)
}
