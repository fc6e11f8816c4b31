//! Build pipeline for multi-style SVG icon sets.
//!
//! The library scans one directory per icon style, parses every SVG into a
//! structured record, and generates framework components, barrel exports and
//! a JSON metadata index for downstream icon packages. Every run recomputes
//! all outputs from scratch and produces deterministic files.

mod aggregate;
mod codegen;
mod concurrent;
mod config;
mod error;
mod metadata;
mod naming;
mod pipeline;
mod scan;
mod style;
mod svg;

pub use aggregate::{DEFAULT_CATEGORY, IconRecord, IconsObject, build_icons_object};
pub use codegen::{
    BARREL_FILE, GeneratedIcon, GeneratedStyle, TargetFormat, generate_exports_file,
    generate_icon_files, generate_style_exports, render_icon_module,
};
pub use concurrent::async_map;
pub use config::{
    BuildConfig, BuildOptions, DEFAULT_ICONS_DIR, DEFAULT_OUTPUT_DIR, IconMetadata, IconOverrides,
    load_config, parse_config,
};
pub use error::{Error, malformed_asset, read_error, write_error};
pub use metadata::{METADATA_FILE, MetadataIndex, generate_metadata, metadata_path, write_metadata};
pub use naming::{IdentifierCollision, assign_identifiers, to_pascal_case};
pub use pipeline::{BuildReport, StyleSummary, run_build, run_metadata};
pub use scan::{
    SVG_EXTENSION, StyleDirectory, StyleScan, icon_name_from_file, list_svg_files,
    read_all_styles, scan_styles,
};
pub use style::{ICON_STYLES, IconStyle};
pub use svg::{
    DEFAULT_VIEW_BOX, PathDescriptor, VectorAsset, build_assets_object, inner_markup, parse_svg,
    read_svg, read_svg_directory, wrap_inner_markup,
};
