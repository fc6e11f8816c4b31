// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Merging of per-style scan results into one icon identity space.
//!
//! Icons are keyed by name. The first style in which an icon is encountered
//! decides its color metadata; later sightings only extend the style list.
//! Because styles are scanned in canonical order this is reproducible: an icon
//! present in both `duotone-rounded` and `stroke-rounded` is always
//! multi-color.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::{config::IconOverrides, scan::StyleDirectory, style::IconStyle};

/// Category assigned to every icon without an override.
pub const DEFAULT_CATEGORY: &str = "general";

/// Aggregated metadata of a single icon across all styles.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord
{
    /// Icon name shared by every style.
    pub name:        String,
    /// Styles providing the icon, in scan order.
    pub styles:      Vec<IconStyle,>,
    /// Categories used to group the icon in catalogues.
    pub categories:  Vec<String,>,
    /// Search tags. Defaults to the icon name.
    pub tags:        Vec<String,>,
    /// Whether the icon is drawn with two colors.
    pub multi_color: bool,
    /// Number of colors, 1 or 2.
    pub color_count: u8,
}

impl IconRecord
{
    fn first_seen(name: &str, style: IconStyle,) -> Self
    {
        Self {
            name:        name.to_owned(),
            styles:      vec![style],
            categories:  vec![DEFAULT_CATEGORY.to_owned()],
            tags:        vec![name.to_owned()],
            multi_color: style.is_multi_color(),
            color_count: style.color_count(),
        }
    }
}

/// Icon name to record mapping, ordered by name.
pub type IconsObject = BTreeMap<String, IconRecord,>;

/// Builds the icon identity mapping from scanned style directories.
///
/// Only file names are consulted; no asset is parsed. Overrides replace the
/// default categories and tags of the icons they name once every style has
/// been merged. Overrides for unknown icons are ignored.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
///
/// use iconsmith::{IconOverrides, IconStyle, StyleDirectory, build_icons_object};
///
/// let directories = vec![StyleDirectory {
///     style: IconStyle::DuotoneRounded,
///     path:  PathBuf::from("icons/duotone-rounded",),
///     files: vec!["star.svg".to_owned()],
/// }];
/// let icons = build_icons_object(&directories, &IconOverrides::new(),);
/// assert!(icons["star"].multi_color);
/// assert_eq!(icons["star"].color_count, 2);
/// ```
pub fn build_icons_object(directories: &[StyleDirectory], overrides: &IconOverrides,) -> IconsObject
{
    let mut icons = IconsObject::new();

    for directory in directories {
        for name in directory.icon_names() {
            match icons.get_mut(name,) {
                Some(record,) => {
                    if !record.styles.contains(&directory.style,) {
                        record.styles.push(directory.style,);
                    }
                }
                None => {
                    icons.insert(name.to_owned(), IconRecord::first_seen(name, directory.style,),);
                }
            }
        }
    }

    for (name, metadata,) in overrides {
        let Some(record,) = icons.get_mut(name,) else {
            debug!("ignoring metadata override for unknown icon '{}'", name);
            continue;
        };
        if let Some(categories,) = &metadata.categories {
            record.categories = categories.clone();
        }
        if let Some(tags,) = &metadata.tags {
            record.tags = tags.clone();
        }
    }

    debug!("aggregated {} icons across {} styles", icons.len(), directories.len());
    icons
}
