use crate::config::{Config, load_config};
use crate::dataset;
use crate::layout::{compute_architecture_layout, compute_feature_board_layout};
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use crate::scaffold::write_scaffold;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "archboard",
    version,
    about = "Static dashboard chart and repository scaffold generator"
)]
pub struct Args {
    /// Artifact to generate; defaults to everything
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for chart artifacts
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "png")]
    pub output_format: OutputFormat,

    /// Config JSON file (themeVariables and layout overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Render the component/flow architecture diagram
    Architecture,
    /// Render the feature status board
    Features,
    /// Write the repository scaffold files
    Scaffold,
    /// Generate every artifact
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command.unwrap_or(Command::All) {
        Command::Architecture => render_architecture(&config, args.output_format)?,
        Command::Features => render_features(&config, args.output_format)?,
        Command::Scaffold => {
            write_scaffold(Path::new("."))?;
        }
        Command::All => {
            render_architecture(&config, args.output_format)?;
            render_features(&config, args.output_format)?;
            write_scaffold(Path::new("."))?;
        }
    }

    Ok(())
}

fn render_architecture(config: &Config, format: OutputFormat) -> Result<()> {
    let spec = dataset::architecture()?;
    let styles = dataset::styles()?;
    let layout = compute_architecture_layout(&spec, &styles, &config.theme, &config.layout)?;
    let svg = render_svg(&layout, &config.theme, &config.layout);
    write_artifact(&svg, "dashboard_architecture", format, config)
}

fn render_features(config: &Config, format: OutputFormat) -> Result<()> {
    let board = dataset::feature_board()?;
    let layout = compute_feature_board_layout(&board, &config.theme, &config.layout)?;
    let svg = render_svg(&layout, &config.theme, &config.layout);
    write_artifact(&svg, "ai_dashboard_features", format, config)
}

fn write_artifact(svg: &str, stem: &str, format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Svg => {
            let output = format!("{stem}.svg");
            write_output_svg(svg, Path::new(&output))?;
            log::info!("wrote {output}");
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = format!("{stem}.png");
                write_output_png(svg, Path::new(&output), &config.render)?;
                log::info!("wrote {output}");
            }
            #[cfg(not(feature = "png"))]
            {
                let _ = config;
                anyhow::bail!("png output requires the `png` feature; use --outputFormat svg");
            }
        }
    }
    Ok(())
}
