use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use multipage_config::logger::init_logger;
use multipage_config::mode::MODE_ENV_VAR;
use multipage_config::{BuildMode, ConfigurationResolver, ProjectConfig, ProjectLayout};

/// Resolve a page manifest into a multi-page bundler configuration printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "multipage-config", version, about)]
struct Args {
  /// Project root containing the sources and the optional multipage.config.json.
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// Page manifest; defaults to the views manifest of the project layout.
  #[arg(long)]
  manifest: Option<PathBuf>,

  /// Build mode (prod or dev); defaults to NODE_ENV, where only `prod` means production.
  #[arg(long)]
  mode: Option<BuildMode>,

  /// Print compact JSON instead of pretty JSON.
  #[arg(long)]
  compact: bool,

  /// Enable debug logging.
  #[arg(short, long)]
  verbose: bool,

  /// Only log errors.
  #[arg(short, long, conflicts_with = "verbose")]
  quiet: bool,
}

/// Everything a run needs once flags, environment and project config are combined.
#[derive(Debug)]
struct Invocation {
  mode: BuildMode,
  layout: ProjectLayout,
  manifest: PathBuf,
}

/// Combine CLI flags with the `NODE_ENV` value and the project config under `--root`.
///
/// `--mode` wins over the environment. The root is made absolute so every emitted path is
/// usable by the bundler regardless of its working directory.
fn resolve_invocation(args: &Args, env_mode: Option<&str>) -> Result<Invocation> {
  let mode = args
    .mode
    .unwrap_or_else(|| BuildMode::from_env_value(env_mode));

  let config =
    ProjectConfig::discover(&args.root).context("failed to load project configuration")?;
  let layout = ProjectLayout::absolute(&args.root, config)
    .with_context(|| format!("failed to resolve project root {}", args.root.display()))?;

  let manifest = match &args.manifest {
    Some(path) => std::path::absolute(path)
      .with_context(|| format!("failed to resolve manifest path {}", path.display()))?,
    None => layout.manifest_path(),
  };

  Ok(Invocation {
    mode,
    layout,
    manifest,
  })
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_logger(args.verbose, args.quiet);

  let env_mode = std::env::var(MODE_ENV_VAR).ok();
  let Invocation {
    mode,
    layout,
    manifest,
  } = resolve_invocation(&args, env_mode.as_deref())?;
  tracing::debug!(%mode, manifest = %manifest.display(), "resolving configuration");

  let configuration = ConfigurationResolver::new(layout).resolve_from_manifest(&manifest, mode)?;
  let json = configuration
    .to_json(!args.compact)
    .context("failed to serialise configuration")?;
  println!("{json}");
  Ok(())
}
