// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Source generation for icon packages.
//!
//! For each style the generator parses every asset, assigns identifiers,
//! and writes one module per icon under `<output>/<style>/`. Barrel files
//! re-export the modules of a style and, at the top level, every style. Output
//! is deterministic: identical inputs produce byte-identical files.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::{self, Error},
    naming::assign_identifiers,
    scan::StyleDirectory,
    style::IconStyle,
    svg::read_svg_directory,
};

/// File name of generated barrel modules.
pub const BARREL_FILE: &str = "index.ts";
/// Module path of the shared helper imported by component modules, relative
/// to a generated icon.
pub const ICON_HELPER_IMPORT: &str = "../../createIcon";

/// Shape of the generated icon modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum TargetFormat
{
    /// Framework component built by the shared icon helper, default-exported.
    Component,
    /// Named export binding the icon to its inner markup.
    Data,
}

impl TargetFormat
{
    /// Selects the format for a target package. Only `react` produces
    /// components; every other package receives plain data modules.
    pub fn from_package(package: &str,) -> Self
    {
        if package.trim().eq_ignore_ascii_case("react",) { Self::Component } else { Self::Data }
    }

    /// Extension of generated icon modules.
    pub const fn extension(self,) -> &'static str
    {
        match self {
            Self::Component => "tsx",
            Self::Data => "ts",
        }
    }
}

/// One generated icon module.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct GeneratedIcon
{
    /// Icon name taken from the source file.
    pub name:       String,
    /// Exported identifier.
    pub identifier: String,
    /// Location of the written module.
    pub path:       PathBuf,
}

/// Modules generated for one style.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct GeneratedStyle
{
    /// Style the modules belong to.
    pub style:     IconStyle,
    /// Format the modules were generated in.
    pub format:    TargetFormat,
    /// Directory holding the modules and the style barrel.
    pub directory: PathBuf,
    /// Modules in asset enumeration order.
    pub icons:     Vec<GeneratedIcon,>,
}

/// Generates one module per icon of `style_dir` under `<output_dir>/<style>/`.
///
/// Every asset is parsed and every identifier assigned before the first file
/// is written, so a malformed asset or a name collision leaves no module of
/// this style behind.
///
/// # Errors
///
/// Returns [`Error::MalformedAsset`] or [`Error::Io`] when the directory batch
/// cannot be read, [`Error::NameCollision`] when two icons share an
/// identifier, and [`Error::Write`] when output cannot be written.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use iconsmith::{TargetFormat, generate_icon_files, read_all_styles};
///
/// # async fn example() -> Result<(), iconsmith::Error> {
/// for directory in read_all_styles(Path::new("icons",),).await {
///     let generated =
///         generate_icon_files(&directory, Path::new("src/icons",), TargetFormat::Component,)
///             .await?;
///     println!("{}: {} modules", generated.style, generated.icons.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn generate_icon_files(
    style_dir: &StyleDirectory,
    output_dir: &Path,
    format: TargetFormat,
) -> Result<GeneratedStyle, Error,>
{
    let assets = read_svg_directory(&style_dir.path,).await?;
    let identifiers = assign_identifiers(assets.iter().map(|asset| asset.name.as_str(),),)
        .map_err(|collision| Error::NameCollision {
            style:      style_dir.style,
            identifier: collision.identifier,
            first:      collision.first,
            second:     collision.second,
        },)?;

    let directory = output_dir.join(style_dir.style.as_str(),);
    create_dir(&directory,).await?;

    let mut icons = Vec::with_capacity(assets.len(),);
    for (asset, identifier,) in assets.iter().zip(identifiers,) {
        let source = render_icon_module(&identifier, asset.inner_markup(), format,)?;
        let path = directory.join(format!("{identifier}.{}", format.extension()),);
        write_source(&path, &source,).await?;
        debug!("wrote {}", path.display());

        icons.push(GeneratedIcon {
            name: asset.name.clone(),
            identifier,
            path,
        },);
    }

    info!("generated {} icons for {}", icons.len(), style_dir.style);
    Ok(GeneratedStyle {
        style: style_dir.style,
        format,
        directory,
        icons,
    },)
}

/// Writes the barrel module of one style, re-exporting every generated module
/// in enumeration order.
///
/// # Errors
///
/// Returns [`Error::Write`] when the barrel cannot be written.
pub async fn generate_style_exports(generated: &GeneratedStyle,) -> Result<PathBuf, Error,>
{
    let path = generated.directory.join(BARREL_FILE,);
    write_source(&path, &render_style_barrel(generated,),).await?;
    Ok(path,)
}

/// Writes the top-level barrel re-exporting every style barrel in style order.
///
/// # Errors
///
/// Returns [`Error::Write`] when the output directory or the barrel cannot be
/// written.
pub async fn generate_exports_file(
    style_dirs: &[StyleDirectory],
    output_dir: &Path,
) -> Result<PathBuf, Error,>
{
    create_dir(output_dir,).await?;
    let path = output_dir.join(BARREL_FILE,);
    let styles: Vec<IconStyle,> = style_dirs.iter().map(|directory| directory.style,).collect();
    write_source(&path, &render_exports_file(&styles,),).await?;

    info!("generated barrel export with {} styles", styles.len());
    Ok(path,)
}

/// Renders the module for a single icon.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if the markup cannot be encoded as a string
/// literal.
pub fn render_icon_module(
    identifier: &str,
    inner_markup: &str,
    format: TargetFormat,
) -> Result<String, Error,>
{
    let literal = serde_json::to_string(inner_markup,)?;

    Ok(match format {
        TargetFormat::Component => format!(
            "import createIcon from '{ICON_HELPER_IMPORT}';\n\nconst {identifier} = createIcon('{identifier}', [\n  {literal}\n]);\n\nexport default {identifier};\n"
        ),
        TargetFormat::Data => format!("export const {identifier} = {literal};\n"),
    },)
}

fn render_style_barrel(generated: &GeneratedStyle,) -> String
{
    let mut buffer = String::with_capacity(generated.icons.len() * 64,);
    for icon in &generated.icons {
        let identifier = icon.identifier.as_str();
        let _ = match generated.format {
            TargetFormat::Component => {
                writeln!(buffer, "export {{ default as {identifier} }} from './{identifier}.js';")
            }
            TargetFormat::Data => writeln!(buffer, "export {{ {identifier} }} from './{identifier}.js';"),
        };
    }
    finish_lines(buffer,)
}

fn render_exports_file(styles: &[IconStyle],) -> String
{
    let mut buffer = String::with_capacity(styles.len() * 48,);
    for style in styles {
        let _ = writeln!(buffer, "export * from './{style}/index.js';");
    }
    finish_lines(buffer,)
}

/// Barrels always end with exactly one newline, even when empty.
fn finish_lines(buffer: String,) -> String
{
    if buffer.is_empty() { "\n".to_owned() } else { buffer }
}

async fn create_dir(path: &Path,) -> Result<(), Error,>
{
    tokio::fs::create_dir_all(path,).await.map_err(|source| error::write_error(path, source,),)
}

async fn write_source(path: &Path, contents: &str,) -> Result<(), Error,>
{
    tokio::fs::write(path, contents,).await.map_err(|source| error::write_error(path, source,),)
}
