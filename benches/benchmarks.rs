// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use iconsmith::{
    ICON_STYLES, IconOverrides, StyleDirectory, build_icons_object, parse_svg, to_pascal_case,
};

fn benchmark_pascal_case(c: &mut Criterion,)
{
    let names = [
        "home",
        "arrow-left-01",
        "user_circle outline",
        "3d-rotate",
        "chevron--double---right",
    ];

    c.bench_function("to_pascal_case", |b| {
        b.iter(|| {
            for name in names {
                black_box(to_pascal_case(black_box(name,),),);
            }
        },)
    },);
}

fn benchmark_parse_svg(c: &mut Criterion,)
{
    let svg = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
  <path d="M3 10.5L12 3l9 7.5V21H3z" stroke="#141B34" stroke-width="1.5"/>
  <path opacity="0.4" d="M9 21v-6h6v6" fill="#141B34"/>
  <g>
    <path d="M12 8.5a1.5 1.5 0 110 3 1.5 1.5 0 010-3z" fill="currentColor"/>
  </g>
</svg>"##;
    let path = Path::new("icons/duotone-rounded/home.svg",);

    c.bench_function("parse_svg_duotone", |b| {
        b.iter(|| parse_svg(black_box(path,), black_box(svg.to_owned(),),).expect("parse failed",),)
    },);
}

fn benchmark_icons_object(c: &mut Criterion,)
{
    let files: Vec<String,> = (0..500).map(|index| format!("icon-{index:03}.svg"),).collect();
    let directories: Vec<StyleDirectory,> = ICON_STYLES
        .iter()
        .map(|style| StyleDirectory {
            style: *style,
            path:  PathBuf::from(format!("icons/{style}"),),
            files: files.clone(),
        },)
        .collect();
    let overrides = IconOverrides::new();

    c.bench_function("build_icons_object_all_styles", |b| {
        b.iter(|| build_icons_object(black_box(&directories,), black_box(&overrides,),),)
    },);
}

criterion_group!(benches, benchmark_pascal_case, benchmark_parse_svg, benchmark_icons_object);
criterion_main!(benches);
