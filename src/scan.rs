// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Discovery of per-style icon directories.
///
/// Each recognized style is resolved to `<icons_dir>/<style>/`. Styles without
/// a readable directory are skipped with a warning; they never abort a run.
use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::{self, Error},
    style::{ICON_STYLES, IconStyle},
};

/// Extension identifying vector icon files.
pub const SVG_EXTENSION: &str = ".svg";

/// Icon files available for one style.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct StyleDirectory
{
    /// Style served by the directory.
    pub style: IconStyle,
    /// Location of the directory on disk.
    pub path:  PathBuf,
    /// SVG file names inside the directory, sorted lexicographically.
    pub files: Vec<String,>,
}

impl StyleDirectory
{
    /// Icon names derived from [`files`](Self::files) by stripping the
    /// extension.
    pub fn icon_names(&self,) -> impl Iterator<Item = &str,> + '_
    {
        self.files.iter().map(|file| icon_name_from_file(file,),)
    }
}

/// Outcome of scanning every recognized style.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct StyleScan
{
    /// Directories that exist, in canonical style order.
    pub directories: Vec<StyleDirectory,>,
    /// Styles whose directory was absent or unreadable.
    pub missing:     Vec<IconStyle,>,
}

/// Scans `icons_dir` for every recognized style.
///
/// One warning is logged per style whose directory cannot be listed.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use iconsmith::scan_styles;
///
/// # async fn example() {
/// let scan = scan_styles(Path::new("icons",),).await;
/// for directory in &scan.directories {
///     println!("{}: {} icons", directory.style, directory.files.len());
/// }
/// # }
/// ```
pub async fn scan_styles(icons_dir: &Path,) -> StyleScan
{
    let mut directories = Vec::with_capacity(ICON_STYLES.len(),);
    let mut missing = Vec::new();

    for style in ICON_STYLES {
        let path = icons_dir.join(style.as_str(),);
        match svg_file_names(&path,).await {
            Ok(files,) => {
                debug!("found {} icons for {}", files.len(), style);
                directories.push(StyleDirectory {
                    style,
                    path,
                    files,
                },);
            }
            Err(source,) => {
                warn!("style directory not found: {} ({})", style, source);
                missing.push(style,);
            }
        }
    }

    StyleScan {
        directories,
        missing,
    }
}

/// Returns the directories of every style present under `icons_dir`.
pub async fn read_all_styles(icons_dir: &Path,) -> Vec<StyleDirectory,>
{
    scan_styles(icons_dir,).await.directories
}

/// Lists full paths of the SVG files inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory cannot be listed.
pub async fn list_svg_files(dir: &Path,) -> Result<Vec<PathBuf,>, Error,>
{
    let names = svg_file_names(dir,).await.map_err(|source| error::read_error(dir, source,),)?;
    Ok(names.into_iter().map(|name| dir.join(name,),).collect(),)
}

/// Strips the SVG extension from a file name.
pub fn icon_name_from_file(file: &str,) -> &str
{
    file.strip_suffix(SVG_EXTENSION,).unwrap_or(file,)
}

async fn svg_file_names(dir: &Path,) -> io::Result<Vec<String,>,>
{
    let mut entries = tokio::fs::read_dir(dir,).await?;
    let mut names = Vec::new();

    while let Some(entry,) = entries.next_entry().await? {
        let Ok(name,) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(SVG_EXTENSION,) {
            names.push(name,);
        }
    }

    names.sort();
    Ok(names,)
}
