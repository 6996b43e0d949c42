//! sidemark CLI — render radial damage markers onto a vehicle side-profile
//! photograph.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sidemark::{
    encode, load_base_image, output_filename, render, DamageAssessment, LateralityRule,
    MarkerStyle, OutputFormat, RenderConfig, ScalingProfile, ViewSide,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "sidemark")]
#[command(about = "Render radial damage markers onto a vehicle side-profile photograph")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a damage overlay from an assessment JSON.
    Render(CliRenderArgs),

    /// Print the built-in marker scaling profiles.
    ProfileInfo,

    /// Print the embedded sample damage assessment.
    SampleAssessment,
}

#[derive(Debug, Clone, Args)]
struct CliRenderArgs {
    /// Path to the base side-profile photograph.
    #[arg(long)]
    image: PathBuf,

    /// Path to the damage assessment JSON.
    #[arg(long)]
    assessment: PathBuf,

    /// Output path (default: damage_overlay_<side>_side.<ext> in the
    /// current directory).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Which vehicle side to render.
    #[arg(long, value_enum, default_value_t = SideArg::Left)]
    side: SideArg,

    /// Marker scaling profile.
    #[arg(long, value_enum, default_value_t = ProfileArg::SideOverlay)]
    profile: ProfileArg,

    /// How component-name laterality interacts with the rendered side.
    #[arg(long, value_enum, default_value_t = LateralityArg::SameSide)]
    laterality: LateralityArg,

    /// Marker layer opacity in [0, 1].
    #[arg(long, default_value_t = 0.8)]
    alpha: f32,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl SideArg {
    fn to_core(self) -> ViewSide {
        match self {
            Self::Left => ViewSide::Left,
            Self::Right => ViewSide::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    SideOverlay,
    Impact,
}

impl ProfileArg {
    fn to_core(self) -> ScalingProfile {
        match self {
            Self::SideOverlay => ScalingProfile::SIDE_OVERLAY,
            Self::Impact => ScalingProfile::IMPACT,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LateralityArg {
    SameSide,
    OppositeSide,
}

impl LateralityArg {
    fn to_core(self) -> LateralityRule {
        match self {
            Self::SameSide => LateralityRule::SameSide,
            Self::OppositeSide => LateralityRule::OppositeSide,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Jpeg,
}

impl FormatArg {
    fn to_core(self) -> OutputFormat {
        match self {
            Self::Png => OutputFormat::Png,
            Self::Jpeg => OutputFormat::Jpeg,
        }
    }
}

impl CliRenderArgs {
    fn to_config(&self) -> CliResult<RenderConfig> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("--alpha must be in [0, 1], got {}", self.alpha).into());
        }
        Ok(RenderConfig {
            profile: self.profile.to_core(),
            laterality: self.laterality.to_core(),
            style: MarkerStyle {
                alpha: self.alpha,
                ..MarkerStyle::default()
            },
        })
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => run_render(&args),
        Commands::ProfileInfo => run_profile_info(),
        Commands::SampleAssessment => run_sample_assessment(),
    }
}

// ── render ─────────────────────────────────────────────────────────────

fn run_render(args: &CliRenderArgs) -> CliResult<()> {
    tracing::info!("Loading base image: {}", args.image.display());
    let base = load_base_image(&args.image)?;
    let (w, h) = base.dimensions();
    tracing::info!("Base image size: {}x{}", w, h);

    let assessment = DamageAssessment::from_json_file(&args.assessment)?;
    tracing::info!(
        "Assessment: {} components, severity {}",
        assessment.sections_of_interest.len(),
        assessment
            .overall_damage_severity
            .as_deref()
            .unwrap_or("unspecified"),
    );

    let side = args.side.to_core();
    let format = args.format.to_core();
    let config = args.to_config()?;

    let rendered = render(&base, side, &assessment, &config);
    let bytes = encode(&rendered, format)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(output_filename(side, format)));
    std::fs::write(&out, &bytes)?;
    tracing::info!("Overlay written to {} ({} bytes)", out.display(), bytes.len());

    Ok(())
}

// ── profile-info ───────────────────────────────────────────────────────

fn run_profile_info() -> CliResult<()> {
    println!("sidemark marker scaling profiles");
    for (name, p) in [
        ("side-overlay", ScalingProfile::SIDE_OVERLAY),
        ("impact", ScalingProfile::IMPACT),
    ] {
        println!("  {}:", name);
        println!("    min ring radius:        {} px", p.min_ring_radius);
        println!("    damage scaling factor:  {}", p.damage_scaling_factor);
    }
    Ok(())
}

// ── sample-assessment ──────────────────────────────────────────────────

fn run_sample_assessment() -> CliResult<()> {
    let sample = DamageAssessment::sample();
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
