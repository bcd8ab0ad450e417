use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "output/circle_fractal.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circle_fractal=info")),
        )
        .init();

    let presenter = circle_fractal::SvgFilePresenter::new();
    let config = circle_fractal::CircleFractalConfig::default();
    let mut controller = circle_fractal::CliController::new(presenter, config);

    controller.generate()?;
    controller.write(OUTPUT_PATH)?;

    Ok(())
}
