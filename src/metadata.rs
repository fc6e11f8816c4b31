// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Persisted metadata index describing every icon of the set.
///
/// The index is written to `<icons_dir>/metadata.json` and overwritten on
/// every run.
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::{
    aggregate::{IconsObject, build_icons_object},
    config::IconOverrides,
    error::{self, Error},
    scan::scan_styles,
    style::IconStyle,
};

/// File name of the metadata index inside the icons directory.
pub const METADATA_FILE: &str = "metadata.json";

/// Aggregated index of the icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct MetadataIndex
{
    /// Records keyed by icon name.
    pub icons:        IconsObject,
    /// Number of records in [`icons`](Self::icons).
    pub total_icons:  usize,
    /// Styles that were scanned, in scan order.
    pub styles:       Vec<IconStyle,>,
    /// RFC 3339 UTC timestamp of the run.
    pub last_updated: String,
}

impl MetadataIndex
{
    /// Builds an index stamped with the current time.
    pub fn new(icons: IconsObject, styles: Vec<IconStyle,>,) -> Self
    {
        Self {
            total_icons: icons.len(),
            icons,
            styles,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true,),
        }
    }
}

/// Location of the metadata index for `icons_dir`.
pub fn metadata_path(icons_dir: &Path,) -> PathBuf
{
    icons_dir.join(METADATA_FILE,)
}

/// Serializes `index` as pretty JSON into `<icons_dir>/metadata.json`.
///
/// # Errors
///
/// Returns [`Error::Write`] when the file cannot be written and
/// [`Error::Serialize`] when encoding fails.
pub async fn write_metadata(icons_dir: &Path, index: &MetadataIndex,) -> Result<PathBuf, Error,>
{
    let path = metadata_path(icons_dir,);
    let mut buffer = serde_json::to_vec_pretty(index,)?;
    buffer.push(b'\n',);
    tokio::fs::write(&path, buffer,).await.map_err(|source| error::write_error(&path, source,),)?;

    Ok(path,)
}

/// Scans `icons_dir`, aggregates every icon and writes the metadata index.
///
/// # Errors
///
/// Propagates failures from [`write_metadata`]. Missing style directories are
/// not errors.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use iconsmith::{IconOverrides, generate_metadata};
///
/// # async fn example() -> Result<(), iconsmith::Error> {
/// let index = generate_metadata(Path::new("icons",), &IconOverrides::new(),).await?;
/// println!("{} icons in {} styles", index.total_icons, index.styles.len());
/// # Ok(())
/// # }
/// ```
pub async fn generate_metadata(
    icons_dir: &Path,
    overrides: &IconOverrides,
) -> Result<MetadataIndex, Error,>
{
    let scan = scan_styles(icons_dir,).await;
    let icons = build_icons_object(&scan.directories, overrides,);
    let styles = scan.directories.iter().map(|directory| directory.style,).collect();
    let index = MetadataIndex::new(icons, styles,);

    let path = write_metadata(icons_dir, &index,).await?;
    info!("wrote metadata for {} icons to {}", index.total_icons, path.display());

    Ok(index,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use chrono::DateTime;
    use serde_json::Value;
    use tempfile::tempdir;

    use super::*;

    fn touch(path: &Path,)
    {
        fs::create_dir_all(path.parent().expect("parent",),).expect("failed to create dir",);
        fs::write(path, "<svg/>",).expect("failed to write file",);
    }

    #[tokio::test]
    async fn generate_metadata_writes_expected_index()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        touch(&temp.path().join("stroke-rounded/home.svg",),);
        touch(&temp.path().join("duotone-rounded/home.svg",),);
        touch(&temp.path().join("duotone-rounded/star.svg",),);

        let index =
            generate_metadata(temp.path(), &IconOverrides::new(),).await.expect("metadata run",);

        assert_eq!(index.total_icons, 2);
        assert_eq!(index.styles, vec![IconStyle::DuotoneRounded, IconStyle::StrokeRounded]);

        let contents =
            fs::read_to_string(temp.path().join(METADATA_FILE,),).expect("index should exist",);
        assert!(contents.ends_with("}\n"));
        let value: Value = serde_json::from_str(&contents,).expect("index should be JSON",);
        assert_eq!(value["totalIcons"], 2);
        assert_eq!(value["styles"], serde_json::json!(["duotone-rounded", "stroke-rounded"]));
        assert_eq!(
            value["icons"]["home"]["styles"],
            serde_json::json!(["duotone-rounded", "stroke-rounded"])
        );
        assert_eq!(value["icons"]["home"]["multiColor"], true);
        assert_eq!(value["icons"]["star"]["colorCount"], 2);
        assert_eq!(value["icons"]["star"]["categories"], serde_json::json!(["general"]));
        assert_eq!(value["icons"]["star"]["tags"], serde_json::json!(["star"]));

        let stamp = value["lastUpdated"].as_str().expect("timestamp should be a string",);
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn missing_styles_are_excluded_from_index()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        touch(&temp.path().join("solid-standard/bell.svg",),);

        let index =
            generate_metadata(temp.path(), &IconOverrides::new(),).await.expect("metadata run",);

        assert_eq!(index.styles, vec![IconStyle::SolidStandard]);
        assert_eq!(index.total_icons, index.icons.len());
    }

    #[tokio::test]
    async fn existing_index_is_overwritten()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        fs::write(temp.path().join(METADATA_FILE,), "stale",).expect("failed to write stale",);

        let index =
            generate_metadata(temp.path(), &IconOverrides::new(),).await.expect("metadata run",);
        assert_eq!(index.total_icons, 0);

        let contents =
            fs::read_to_string(temp.path().join(METADATA_FILE,),).expect("index should exist",);
        assert!(!contents.contains("stale"));
    }

    #[tokio::test]
    async fn write_metadata_reports_unwritable_location()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let missing = temp.path().join("absent",);
        let index = MetadataIndex::new(IconsObject::new(), Vec::new(),);

        let error = write_metadata(&missing, &index,).await.expect_err("expected write failure",);
        match error {
            Error::Write {
                path, ..
            } => assert_eq!(path, missing.join(METADATA_FILE)),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn total_icons_matches_mapping_size()
    {
        let mut icons = IconsObject::new();
        for name in ["a", "b", "c"] {
            icons.insert(name.to_owned(), crate::aggregate::IconRecord {
                name:        name.to_owned(),
                styles:      vec![IconStyle::StrokeStandard],
                categories:  vec!["general".to_owned()],
                tags:        vec![name.to_owned()],
                multi_color: false,
                color_count: 1,
            },);
        }
        let index = MetadataIndex::new(icons, vec![IconStyle::StrokeStandard],);
        assert_eq!(index.total_icons, 3);
    }
}
