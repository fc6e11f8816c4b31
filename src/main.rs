//! Command-line interface for the iconsmith binary.
//!
//! Invoked without a subcommand the CLI scans the icon set and, when a
//! package is named, generates its sources. The `metadata` subcommand writes
//! the metadata index instead.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use iconsmith::{
    BuildOptions, BuildReport, Error, IconStyle, MetadataIndex, load_config, metadata_path,
    run_build, run_metadata,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for building styled icon packages.
#[derive(Debug, Parser,)]
#[command(
    name = "iconsmith",
    version,
    about = "Generate icon components, barrel exports and metadata from styled SVG sets"
)]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command,>,

    /// Build options used when no subcommand is given.
    #[command(flatten)]
    build: BuildArgs,

    /// Enable debug logging. `RUST_LOG` takes precedence when set.
    #[arg(long = "verbose", short = 'v', global = true, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Debug, Subcommand,)]
enum Command
{
    /// Scan icon styles and generate components and barrel exports.
    Build(BuildArgs,),
    /// Write the metadata index into the icons directory.
    Metadata(MetadataArgs,),
}

#[derive(Debug, Args, Default,)]
struct BuildArgs
{
    /// Directory containing one sub-directory per style [default: icons].
    #[arg(long = "icons-dir", value_name = "PATH")]
    icons_dir: Option<PathBuf,>,

    /// Directory receiving generated sources [default: src/icons].
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Target package; component generation is skipped when omitted.
    #[arg(long = "package", value_name = "NAME")]
    package: Option<String,>,

    /// Optional YAML build configuration.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,
}

#[derive(Debug, Args, Default,)]
struct MetadataArgs
{
    /// Directory containing one sub-directory per style [default: icons].
    #[arg(long = "icons-dir", value_name = "PATH")]
    icons_dir: Option<PathBuf,>,

    /// Optional YAML build configuration with metadata overrides.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,
}

/// Summary printed by the `metadata` subcommand.
#[derive(Debug, Serialize,)]
#[serde(rename_all = "camelCase")]
struct MetadataSummary<'a,>
{
    path:         String,
    total_icons:  usize,
    styles:       &'a [IconStyle],
    last_updated: &'a str,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    let cli = Cli::parse();
    init_tracing(cli.verbose,);

    if let Err(error,) = run(cli,).await {
        report_failure(&mut io::stderr().lock(), &error,);
        process::exit(1,);
    }
}

fn report_failure<W: io::Write,>(writer: &mut W, error: &Error,)
{
    let _ = writeln!(writer, "{}", error.to_display_string());
}

fn init_tracing(verbose: bool,)
{
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback,),);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_target(false,)
        .with_writer(io::stderr,)
        .try_init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, generation and metadata failures.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    match cli.command {
        Some(Command::Build(args,),) => run_build_command(&args,).await.map(|_| (),),
        Some(Command::Metadata(args,),) => run_metadata_command(&args,).await,
        None => run_build_command(&cli.build,).await.map(|_| (),),
    }
}

async fn run_build_command(args: &BuildArgs,) -> Result<BuildReport, Error,>
{
    let options = resolve_build_options(args,)?;
    info!("icons directory: {}", options.icons_dir.display());
    info!("output directory: {}", options.output_dir.display());
    info!("package: {}", options.package.as_deref().unwrap_or("N/A",));

    let report = run_build(&options,).await?;
    info!("build completed successfully");
    Ok(report,)
}

async fn run_metadata_command(args: &MetadataArgs,) -> Result<(), Error,>
{
    let options = resolve_metadata_options(args,)?;
    let index = run_metadata(&options,).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_metadata_summary(&mut handle, &index, &metadata_path(&options.icons_dir,),)
}

fn resolve_build_options(args: &BuildArgs,) -> Result<BuildOptions, Error,>
{
    let config = args.config.as_deref().map(load_config,).transpose()?;
    Ok(BuildOptions::resolve(
        config,
        args.icons_dir.clone(),
        args.output.clone(),
        args.package.clone(),
    ),)
}

fn resolve_metadata_options(args: &MetadataArgs,) -> Result<BuildOptions, Error,>
{
    let config = args.config.as_deref().map(load_config,).transpose()?;
    Ok(BuildOptions::resolve(config, args.icons_dir.clone(), None, None,),)
}

fn write_metadata_summary<W: io::Write,>(
    writer: &mut W,
    index: &MetadataIndex,
    path: &Path,
) -> Result<(), Error,>
{
    let summary = MetadataSummary {
        path:         path.to_string_lossy().into_owned(),
        total_icons:  index.total_icons,
        styles:       &index.styles,
        last_updated: &index.last_updated,
    };
    serde_json::to_writer(&mut *writer, &summary,)?;
    writer.write_all(b"\n",).map_err(|source| iconsmith::write_error(path, source,),)?;

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::{Parser, error::ErrorKind};
    use iconsmith::{IconStyle, IconsObject, MetadataIndex};
    use tempfile::tempdir;

    use super::{
        BuildArgs, Cli, Command, MetadataArgs, report_failure, resolve_build_options,
        resolve_metadata_options, run, write_metadata_summary,
    };

    #[test]
    fn cli_accepts_default_build_invocation()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--icons-dir",
            "./icons",
            "--output",
            "./src/icons",
            "--package",
            "react",
        ],)
        .expect("failed to parse CLI",);

        assert!(cli.command.is_none());
        assert_eq!(cli.build.icons_dir.as_deref(), Some(Path::new("./icons")));
        assert_eq!(cli.build.output.as_deref(), Some(Path::new("./src/icons")));
        assert_eq!(cli.build.package.as_deref(), Some("react"));
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_accepts_metadata_subcommand()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "metadata",
            "--icons-dir",
            "assets",
            "--verbose",
        ],)
        .expect("failed to parse CLI",);

        assert!(cli.verbose);
        match cli.command.expect("missing metadata command",) {
            Command::Metadata(args,) => {
                assert_eq!(args.icons_dir.as_deref(), Some(Path::new("assets")));
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn help_flags_request_help_output()
    {
        for flag in ["--help", "-h"] {
            let error = Cli::try_parse_from([env!("CARGO_PKG_NAME"), flag],)
                .expect_err("help should short-circuit parsing",);
            assert_eq!(error.kind(), ErrorKind::DisplayHelp);
            assert_eq!(error.exit_code(), 0);
        }
    }

    #[test]
    fn build_options_default_without_flags()
    {
        let options = resolve_build_options(&BuildArgs::default(),).expect("defaults should resolve",);
        assert_eq!(options.icons_dir, Path::new("icons"));
        assert_eq!(options.output_dir, Path::new("src/icons"));
        assert!(options.package.is_none());
    }

    #[test]
    fn build_options_merge_config_file_under_flags()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("iconsmith.yaml",);
        fs::write(&config_path, "icons_dir: art\noutput: gen\npackage: vue\n",)
            .expect("failed to write config",);

        let args = BuildArgs {
            package: Some("react".to_owned(),),
            config: Some(config_path,),
            ..BuildArgs::default()
        };
        let options = resolve_build_options(&args,).expect("options should resolve",);

        assert_eq!(options.icons_dir, Path::new("art"));
        assert_eq!(options.output_dir, Path::new("gen"));
        assert_eq!(options.package.as_deref(), Some("react"));
    }

    #[test]
    fn metadata_options_report_missing_config()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let args = MetadataArgs {
            icons_dir: None,
            config:    Some(temp.path().join("missing.yaml",),),
        };

        let error = resolve_metadata_options(&args,).expect_err("expected io failure",);
        assert!(matches!(error, iconsmith::Error::Io { .. }));
    }

    #[test]
    fn metadata_summary_is_compact_json()
    {
        let index = MetadataIndex {
            icons:        IconsObject::new(),
            total_icons:  0,
            styles:       vec![IconStyle::StrokeRounded],
            last_updated: "2025-01-01T00:00:00.000Z".to_owned(),
        };
        let mut buffer = Cursor::new(Vec::new(),);
        write_metadata_summary(&mut buffer, &index, Path::new("icons/metadata.json",),)
            .expect("failed to write summary",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(
            output,
            "{\"path\":\"icons/metadata.json\",\"totalIcons\":0,\"styles\":[\"stroke-rounded\"],\"lastUpdated\":\"2025-01-01T00:00:00.000Z\"}\n"
        );
    }

    #[test]
    fn failure_report_is_the_bare_error_message()
    {
        let error = iconsmith::Error::validation("tags override for 'home' must not be empty",);
        let mut buffer = Cursor::new(Vec::new(),);
        report_failure(&mut buffer, &error,);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(
            output,
            "invalid configuration: tags override for 'home' must not be empty\n"
        );
    }

    #[tokio::test]
    async fn default_invocation_without_package_succeeds_on_empty_tree()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let icons = temp.path().join("icons",);
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--icons-dir",
            icons.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);

        run(cli,).await.expect("scan-only run should succeed",);
    }

    #[tokio::test]
    async fn build_subcommand_reports_malformed_assets()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let style_dir = temp.path().join("icons/stroke-rounded",);
        fs::create_dir_all(&style_dir,).expect("failed to create style dir",);
        fs::write(style_dir.join("bad.svg",), "<svg>",).expect("failed to write icon",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "build",
            "--icons-dir",
            temp.path().join("icons",).to_str().expect("utf8",),
            "--output",
            temp.path().join("out",).to_str().expect("utf8",),
            "--package",
            "react",
        ],)
        .expect("failed to parse CLI",);

        let error = run(cli,).await.expect_err("malformed asset should fail the run",);
        assert!(matches!(error, iconsmith::Error::MalformedAsset { .. }));
    }
}
