use fingermatch::{
    find_with_retries_config, Color, Fingerprint, MatchConfig, Matcher, OwnedImage, Raster,
    RetryConfig, SampleConfig,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> OwnedImage {
    OwnedImage::from_fn(width, height, |x, y| {
        let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
        Color::from_rgba8(value as u8, (x & 0xFF) as u8, (y & 0xFF) as u8, 255)
    })
    .unwrap()
}

fn extract_patch(
    image: &OwnedImage,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> OwnedImage {
    OwnedImage::from_fn(width, height, |x, y| {
        image.color_at(x0 + x, y0 + y).unwrap()
    })
    .unwrap()
}

fn bench_matcher(c: &mut Criterion) {
    let image = make_image(512, 512);
    let template = extract_patch(&image, 300, 260, 64, 48);
    let fp = Fingerprint::build_with_config(
        &template,
        &SampleConfig {
            points: 16,
            dedup: true,
        },
    );

    let sequential = Matcher::new(fp.clone());
    c.bench_function("find_sequential_512", |b| {
        b.iter(|| black_box(sequential.find(&image)));
    });

    let parallel = Matcher::new(fp).with_config(MatchConfig { parallel: true });
    c.bench_function("find_parallel_512", |b| {
        b.iter(|| black_box(parallel.find(&image)));
    });

    c.bench_function("fingerprint_build_16", |b| {
        b.iter(|| black_box(Fingerprint::build(&template, 16)));
    });

    let cfg = RetryConfig {
        sample: SampleConfig::with_points(8),
        attempts: 5,
        ..RetryConfig::default()
    };
    c.bench_function("find_with_retries_512", |b| {
        b.iter(|| black_box(find_with_retries_config(&image, &template, &cfg)));
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
