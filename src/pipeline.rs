// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Orchestration of the build and metadata entry points.
///
/// Both entry points scan the icons directory first and are independent of
/// each other: either can run without the other and both are idempotent.
/// Any failure aborts the run; files written before it stay on disk.
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    codegen::{
        GeneratedStyle, TargetFormat, generate_exports_file, generate_icon_files,
        generate_style_exports,
    },
    config::BuildOptions,
    error::Error,
    metadata::{MetadataIndex, generate_metadata},
    scan::scan_styles,
    style::IconStyle,
};

/// Icon count of one scanned style.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct StyleSummary
{
    /// Scanned style.
    pub style: IconStyle,
    /// Number of SVG files found.
    pub icons: usize,
}

/// Outcome of a successful build run.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct BuildReport
{
    /// Styles found on disk, in scan order.
    pub styles:       Vec<StyleSummary,>,
    /// Styles without a directory.
    pub missing:      Vec<IconStyle,>,
    /// Modules generated per style. Empty when no package was requested.
    pub generated:    Vec<GeneratedStyle,>,
    /// Top-level barrel, when generation ran.
    pub exports_file: Option<PathBuf,>,
}

/// Scans the icon set and, when a package is requested, generates modules,
/// style barrels and the top-level barrel.
///
/// Styles are processed sequentially in canonical order.
///
/// # Errors
///
/// Propagates the first generation failure.
///
/// # Example
///
/// ```no_run
/// use iconsmith::{BuildOptions, run_build};
///
/// # async fn example() -> Result<(), iconsmith::Error> {
/// let options = BuildOptions {
///     package: Some("react".to_owned(),),
///     ..BuildOptions::default()
/// };
/// let report = run_build(&options,).await?;
/// println!("generated {} styles", report.generated.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_build(options: &BuildOptions,) -> Result<BuildReport, Error,>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] {msg}",)
            .expect("valid template",),
    );

    pb.set_message(format!("Reading icon styles from {}...", options.icons_dir.display()),);
    info!("reading icon styles from {}", options.icons_dir.display());
    let scan = scan_styles(&options.icons_dir,).await;

    info!("found {} style directories", scan.directories.len());
    let styles: Vec<StyleSummary,> = scan
        .directories
        .iter()
        .map(|directory| StyleSummary {
            style: directory.style,
            icons: directory.files.len(),
        },)
        .collect();
    for summary in &styles {
        info!("  - {}: {} icons", summary.style, summary.icons);
    }

    let mut generated = Vec::new();
    let mut exports_file = None;

    if let Some(package,) = options.package.as_deref() {
        let format = TargetFormat::from_package(package,);
        debug!("generating {:?} modules for package {}", format, package);

        for directory in &scan.directories {
            pb.set_message(format!("Generating {} icons...", directory.style),);
            let style = generate_icon_files(directory, &options.output_dir, format,).await?;
            generate_style_exports(&style,).await?;
            generated.push(style,);
        }

        pb.set_message("Generating barrel exports...",);
        exports_file = Some(generate_exports_file(&scan.directories, &options.output_dir,).await?,);
        pb.finish_with_message(format!(
            "Build complete: {} styles written to {}",
            generated.len(),
            options.output_dir.display()
        ),);
    } else {
        info!("no package requested, skipping component generation");
        pb.finish_with_message("Scan complete: no package requested",);
    }

    Ok(BuildReport {
        styles,
        missing: scan.missing,
        generated,
        exports_file,
    },)
}

/// Scans the icon set and writes the metadata index.
///
/// # Errors
///
/// Propagates metadata write failures.
pub async fn run_metadata(options: &BuildOptions,) -> Result<MetadataIndex, Error,>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .expect("valid template",),
    );

    pb.set_message(format!("Indexing icons in {}...", options.icons_dir.display()),);
    let index = generate_metadata(&options.icons_dir, &options.overrides,).await?;
    pb.finish_with_message(format!("Metadata complete: {} icons indexed", index.total_icons),);

    Ok(index,)
}
