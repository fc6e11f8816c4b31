// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing of individual SVG icon files.
//!
//! Every icon is read into a [`VectorAsset`] that keeps the original markup
//! for code generation alongside the structural data used for inspection: the
//! root `viewBox`, every `<path>` with its presentation attributes, and the
//! byte range between the root start and end tags. Documents must be
//! well-formed; anything else is reported as [`Error::MalformedAsset`] and
//! aborts the surrounding batch.
//!
//! Entities declared in an internal DTD subset are resolved in the attributes
//! that are kept. References to undeclared entities are malformed.

use std::{
    collections::{BTreeMap, HashMap},
    ops::Range,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use quick_xml::{
    Reader,
    escape::{escape, resolve_predefined_entity},
    events::{BytesStart, Event, attributes::Attribute},
};
use regex::Regex;

use crate::{
    concurrent::async_map,
    error::{self, Error},
    scan::list_svg_files,
};

/// View box assumed when the root element does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

static ENTITY_DECLARATION: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([A-Za-z_][\w.\-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#,)
        .expect("valid pattern",)
},);

type Entities = HashMap<String, String,>;

/// Geometry and presentation attributes of a single `<path>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct PathDescriptor
{
    /// Path geometry. Empty when the attribute is absent.
    pub d:            String,
    /// Optional fill paint.
    pub fill:         Option<String,>,
    /// Optional stroke paint.
    pub stroke:       Option<String,>,
    /// Optional opacity.
    pub opacity:      Option<String,>,
    /// Optional stroke width.
    pub stroke_width: Option<String,>,
}

/// Parsed icon file.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct VectorAsset
{
    /// Icon name derived from the file stem.
    pub name:     String,
    /// Original markup as read from disk.
    pub content:  String,
    /// Root `viewBox`, or [`DEFAULT_VIEW_BOX`].
    pub view_box: String,
    /// Every `<path>` element in document order.
    pub paths:    Vec<PathDescriptor,>,
    inner:        Range<usize,>,
}

impl VectorAsset
{
    /// Markup between the root start and end tags, trimmed.
    pub fn inner_markup(&self,) -> &str
    {
        self.content[self.inner.clone()].trim()
    }
}

/// Structural data gathered in a single pass over a document.
struct Structure
{
    view_box: Option<String,>,
    paths:    Vec<PathDescriptor,>,
    inner:    Range<usize,>,
}

/// Reads and parses the SVG file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::MalformedAsset`] when it is not a well-formed SVG document.
pub async fn read_svg(path: PathBuf,) -> Result<VectorAsset, Error,>
{
    let content =
        tokio::fs::read_to_string(&path,).await.map_err(|source| error::read_error(&path, source,),)?;
    parse_svg(&path, content,)
}

/// Reads every SVG file in `dir` concurrently.
///
/// Assets are returned in file name order. When any file fails, the whole
/// batch fails with the error of the first failing file in that order.
///
/// # Errors
///
/// Propagates listing, read and parse failures.
pub async fn read_svg_directory(dir: &Path,) -> Result<Vec<VectorAsset,>, Error,>
{
    let files = list_svg_files(dir,).await?;
    async_map(files, read_svg,).await
}

/// Indexes parsed assets by icon name. Later duplicates replace earlier ones.
pub fn build_assets_object(assets: Vec<VectorAsset,>,) -> BTreeMap<String, VectorAsset,>
{
    assets.into_iter().map(|asset| (asset.name.clone(), asset,),).collect()
}

/// Parses SVG markup read from `path`.
///
/// The icon name is the file stem of `path`. Every `<path>` element below the
/// root contributes a [`PathDescriptor`], including those nested in groups.
///
/// # Errors
///
/// Returns [`Error::MalformedAsset`] when the markup is not well-formed, has
/// no single root element, or the root is not `<svg>`.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use iconsmith::parse_svg;
///
/// let markup = r#"<svg viewBox="0 0 16 16"><path d="M0 0h16" stroke="currentColor"/></svg>"#;
/// let asset = parse_svg(Path::new("icons/line.svg",), markup.to_owned(),)?;
/// assert_eq!(asset.name, "line");
/// assert_eq!(asset.view_box, "0 0 16 16");
/// assert_eq!(asset.paths[0].stroke.as_deref(), Some("currentColor"));
/// assert_eq!(asset.inner_markup(), r#"<path d="M0 0h16" stroke="currentColor"/>"#);
/// # Ok::<(), iconsmith::Error>(())
/// ```
pub fn parse_svg(path: &Path, content: String,) -> Result<VectorAsset, Error,>
{
    let name = path.file_stem().map(|stem| stem.to_string_lossy().into_owned(),).unwrap_or_default();
    let structure =
        parse_structure(&content,).map_err(|message| error::malformed_asset(path, message,),)?;

    Ok(VectorAsset {
        name,
        content,
        view_box: structure.view_box.unwrap_or_else(|| DEFAULT_VIEW_BOX.to_owned(),),
        paths: structure.paths,
        inner: structure.inner,
    },)
}

/// Markup between the root `<svg>` start and end tags of `content`, trimmed.
///
/// Prologue, comments and processing instructions around the root are never
/// part of the result. Returns `None` when `content` is not a well-formed SVG
/// document.
pub fn inner_markup(content: &str,) -> Option<&str,>
{
    parse_structure(content,).ok().map(|structure| content[structure.inner].trim(),)
}

/// Wraps inner markup in a standalone `<svg>` root with the given view box.
pub fn wrap_inner_markup(inner: &str, view_box: &str,) -> String
{
    format!(r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="{}">{inner}</svg>"#, escape(view_box,))
}

/// Walks the document once, returning the root `viewBox`, every path and the
/// byte range enclosed by the root element.
fn parse_structure(content: &str,) -> Result<Structure, String,>
{
    let mut reader = Reader::from_str(content,);
    reader.config_mut().trim_text(true,);

    let mut entities = Entities::new();
    let mut open_elements: Vec<String,> = Vec::new();
    let mut view_box = None;
    let mut inner = None;
    let mut paths = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|source| format!("{source} at byte {}", reader.error_position()),)?;

        match event {
            Event::DocType(ref declaration,) => {
                let declaration = String::from_utf8_lossy(declaration,);
                entities.extend(declared_entities(&declaration,),);
            }
            Event::Start(ref element,) | Event::Empty(ref element,) => {
                let element_name = local_name(element,);
                if open_elements.is_empty() {
                    if inner.is_some() {
                        return Err("multiple root elements".to_owned(),);
                    }
                    if element_name != "svg" {
                        return Err(format!("root element is <{element_name}>, expected <svg>"),);
                    }
                    view_box = attribute(element, "viewBox", &entities,)?;
                    let start = offset(&reader, content,);
                    inner = Some(start..start,);
                } else if element_name == "path" {
                    paths.push(path_descriptor(element, &entities,)?,);
                }

                if matches!(event, Event::Start(_)) {
                    open_elements.push(element_name,);
                }
            }
            Event::End(_,) => {
                if open_elements.pop().is_none() {
                    return Err("unexpected closing tag".to_owned(),);
                }
                if open_elements.is_empty()
                    && let Some(range,) = inner.as_mut()
                {
                    let after = offset(&reader, content,);
                    range.end = content[..after].rfind("</",).unwrap_or(after,).max(range.start,);
                }
            }
            Event::Text(ref text,) if open_elements.is_empty() => {
                if !text.iter().all(u8::is_ascii_whitespace,) {
                    return Err("text outside of the root element".to_owned(),);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed,) = open_elements.last() {
        return Err(format!("unexpected end of document, <{unclosed}> is not closed"),);
    }
    let Some(inner,) = inner else {
        return Err("document has no root element".to_owned(),);
    };

    Ok(Structure {
        view_box,
        paths,
        inner,
    },)
}

/// Current reader position as a byte offset into `content`.
fn offset(reader: &Reader<&[u8],>, content: &str,) -> usize
{
    usize::try_from(reader.buffer_position(),).map_or(content.len(), |position| {
        position.min(content.len(),)
    },)
}

fn declared_entities(declaration: &str,) -> impl Iterator<Item = (String, String,),> + '_
{
    ENTITY_DECLARATION.captures_iter(declaration,).filter_map(|captures| {
        let name = captures.get(1,)?.as_str().to_owned();
        let value = captures.get(2,).or_else(|| captures.get(3,),)?.as_str().to_owned();
        Some((name, value,),)
    },)
}

fn local_name(element: &BytesStart<'_,>,) -> String
{
    String::from_utf8_lossy(element.local_name().as_ref(),).into_owned()
}

fn unescape(attribute: &Attribute<'_,>, entities: &Entities,) -> Result<String, String,>
{
    attribute
        .unescape_value_with(|entity| {
            entities.get(entity,).map(String::as_str,).or_else(|| resolve_predefined_entity(entity,),)
        },)
        .map(|value| value.into_owned(),)
        .map_err(|source| source.to_string(),)
}

fn path_descriptor(element: &BytesStart<'_,>, entities: &Entities,) -> Result<PathDescriptor, String,>
{
    let mut descriptor = PathDescriptor::default();

    for candidate in element.attributes() {
        let candidate = candidate.map_err(|source| source.to_string(),)?;
        let slot = match candidate.key.as_ref() {
            b"d" => {
                descriptor.d = unescape(&candidate, entities,)?;
                continue;
            }
            b"fill" => &mut descriptor.fill,
            b"stroke" => &mut descriptor.stroke,
            b"opacity" => &mut descriptor.opacity,
            b"stroke-width" => &mut descriptor.stroke_width,
            _ => continue,
        };
        *slot = Some(unescape(&candidate, entities,)?,);
    }

    Ok(descriptor,)
}

fn attribute(
    element: &BytesStart<'_,>,
    key: &str,
    entities: &Entities,
) -> Result<Option<String,>, String,>
{
    for candidate in element.attributes() {
        let candidate = candidate.map_err(|source| source.to_string(),)?;
        if candidate.key.as_ref() == key.as_bytes() {
            return unescape(&candidate, entities,).map(Some,);
        }
    }

    Ok(None,)
}
