use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use archboard::config::LayoutConfig;
use archboard::dataset;
use archboard::layout::{compute_architecture_layout, compute_feature_board_layout};
use archboard::render::render_svg;
use archboard::theme::Theme;

fn bench_architecture(c: &mut Criterion) {
    let spec = dataset::architecture().expect("builtin architecture dataset");
    let styles = dataset::styles().expect("builtin style table");
    let theme = Theme::dashboard();
    let config = LayoutConfig::default();

    c.bench_function("architecture_layout_and_render", |b| {
        b.iter(|| {
            let layout =
                compute_architecture_layout(black_box(&spec), &styles, &theme, &config)
                    .expect("layout");
            black_box(render_svg(&layout, &theme, &config))
        })
    });
}

fn bench_feature_board(c: &mut Criterion) {
    let board = dataset::feature_board().expect("builtin feature board");
    let theme = Theme::dashboard();
    let config = LayoutConfig::default();

    c.bench_function("feature_board_layout_and_render", |b| {
        b.iter(|| {
            let layout = compute_feature_board_layout(black_box(&board), &theme, &config)
                .expect("layout");
            black_box(render_svg(&layout, &theme, &config))
        })
    });
}

criterion_group!(benches, bench_architecture, bench_feature_board);
criterion_main!(benches);
