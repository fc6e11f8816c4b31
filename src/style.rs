// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Closed set of visual styles an icon set is published in.
//!
//! The declaration order of [`IconStyle`] is the canonical scan order. It is
//! load-bearing: the aggregator derives multi-color metadata from the first
//! style in which an icon appears, so reordering variants changes output.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Visual variant of the icon set.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle
{
    /// Rounded glyphs with a translucent second layer.
    BulkRounded,
    /// Rounded glyphs drawn with two tones of one color.
    DuotoneRounded,
    /// Filled glyphs with rounded corners.
    SolidRounded,
    /// Filled glyphs with sharp corners.
    SolidSharp,
    /// Filled glyphs with standard corners.
    SolidStandard,
    /// Outlined glyphs with rounded caps.
    StrokeRounded,
    /// Outlined glyphs with sharp caps.
    StrokeSharp,
    /// Outlined glyphs with standard caps.
    StrokeStandard,
    /// Rounded glyphs with an accent stroke in a second color.
    TwotoneRounded,
}

/// Every recognized style in canonical scan order.
pub const ICON_STYLES: [IconStyle; 9] = [
    IconStyle::BulkRounded,
    IconStyle::DuotoneRounded,
    IconStyle::SolidRounded,
    IconStyle::SolidSharp,
    IconStyle::SolidStandard,
    IconStyle::StrokeRounded,
    IconStyle::StrokeSharp,
    IconStyle::StrokeStandard,
    IconStyle::TwotoneRounded,
];

impl IconStyle
{
    /// Returns the directory name used for this style on disk and in
    /// generated import paths.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::BulkRounded => "bulk-rounded",
            Self::DuotoneRounded => "duotone-rounded",
            Self::SolidRounded => "solid-rounded",
            Self::SolidSharp => "solid-sharp",
            Self::SolidStandard => "solid-standard",
            Self::StrokeRounded => "stroke-rounded",
            Self::StrokeSharp => "stroke-sharp",
            Self::StrokeStandard => "stroke-standard",
            Self::TwotoneRounded => "twotone-rounded",
        }
    }

    /// Whether icons in this style are drawn with two colors by convention.
    pub const fn is_multi_color(self,) -> bool
    {
        matches!(self, Self::BulkRounded | Self::DuotoneRounded | Self::TwotoneRounded)
    }

    /// Number of colors used by icons of this style.
    pub const fn color_count(self,) -> u8
    {
        if self.is_multi_color() { 2 } else { 1 }
    }
}

impl fmt::Display for IconStyle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

impl FromStr for IconStyle
{
    type Err = Error;

    fn from_str(value: &str,) -> Result<Self, Self::Err,>
    {
        ICON_STYLES
            .into_iter()
            .find(|style| style.as_str() == value,)
            .ok_or_else(|| Error::validation(format!("unknown icon style '{value}'"),),)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn canonical_order_matches_declaration_order()
    {
        let mut sorted = ICON_STYLES;
        sorted.sort();
        assert_eq!(sorted, ICON_STYLES);
    }

    #[test]
    fn multi_color_subset_is_bulk_duotone_and_twotone()
    {
        let multi: Vec<IconStyle,> =
            ICON_STYLES.into_iter().filter(|style| style.is_multi_color(),).collect();
        assert_eq!(multi, vec![
            IconStyle::BulkRounded,
            IconStyle::DuotoneRounded,
            IconStyle::TwotoneRounded
        ]);
    }

    #[test]
    fn color_count_follows_multi_color_flag()
    {
        assert_eq!(IconStyle::DuotoneRounded.color_count(), 2);
        assert_eq!(IconStyle::StrokeRounded.color_count(), 1);
    }

    #[test]
    fn display_and_from_str_agree()
    {
        for style in ICON_STYLES {
            let parsed: IconStyle = style.to_string().parse().expect("known style",);
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn from_str_rejects_unknown_style()
    {
        let error = "stroke-curly".parse::<IconStyle>().expect_err("expected failure",);
        assert!(error.to_string().contains("stroke-curly"));
    }

    #[test]
    fn serde_uses_directory_names()
    {
        let json = serde_json::to_string(&IconStyle::SolidSharp,).expect("serialize",);
        assert_eq!(json, "\"solid-sharp\"");
        let style: IconStyle = serde_json::from_str("\"twotone-rounded\"",).expect("deserialize",);
        assert_eq!(style, IconStyle::TwotoneRounded);
    }
}
