use fingermatch::{Color, Fingerprint, OwnedImage, Raster, SampleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn make_template(width: usize, height: usize) -> OwnedImage {
    OwnedImage::from_fn(width, height, |x, y| {
        let value = ((x * 11) ^ (y * 3) ^ (x * y)) & 0xFF;
        Color::from_rgba8(value as u8, (x * 7) as u8, (y * 5) as u8, 255)
    })
    .unwrap()
}

#[test]
fn build_samples_requested_count_inside_template() {
    let template = make_template(17, 9);
    let fp = Fingerprint::build(&template, 40);

    assert_eq!(fp.len(), 40);
    assert_eq!(fp.template_width(), 17);
    assert_eq!(fp.template_height(), 9);
    for p in fp.points() {
        assert!(p.x() < 17 && p.y() < 9);
        assert_eq!(template.color_at(p.x(), p.y()), Some(p.color()));
    }
}

#[test]
fn repeated_builds_are_independently_seeded() {
    let template = make_template(64, 64);
    let first = Fingerprint::build(&template, 16);
    let second = Fingerprint::build(&template, 16);
    // 16 draws over 4096 coordinates: equal fingerprints would mean a shared seed.
    assert_ne!(first, second);
}

#[test]
fn seeded_sampling_is_reproducible() {
    let template = make_template(20, 12);
    let cfg = SampleConfig::with_points(12);

    let a = Fingerprint::sample(&template, &cfg, &mut StdRng::seed_from_u64(42));
    let b = Fingerprint::sample(&template, &cfg, &mut StdRng::seed_from_u64(42));
    let c = Fingerprint::sample(&template, &cfg, &mut StdRng::seed_from_u64(43));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn plain_sampling_may_repeat_coordinates() {
    let template = make_template(2, 1);
    let fp = Fingerprint::sample(
        &template,
        &SampleConfig::with_points(10),
        &mut StdRng::seed_from_u64(1),
    );
    let unique: HashSet<_> = fp.points().iter().map(|p| (p.x(), p.y())).collect();
    assert_eq!(fp.len(), 10);
    assert!(unique.len() <= 2);
}

#[test]
fn dedup_sampling_draws_distinct_coordinates_and_caps() {
    let template = make_template(4, 3);
    let cfg = SampleConfig {
        points: 50,
        dedup: true,
    };
    let fp = Fingerprint::sample(&template, &cfg, &mut StdRng::seed_from_u64(9));
    let unique: HashSet<_> = fp.points().iter().map(|p| (p.x(), p.y())).collect();
    assert_eq!(fp.len(), 12);
    assert_eq!(unique.len(), 12);
}

#[test]
fn effective_points_reflect_dedup_cap() {
    let plain = SampleConfig::with_points(50);
    let dedup = SampleConfig {
        points: 50,
        dedup: true,
    };
    assert_eq!(plain.effective_points(4, 3), 50);
    assert_eq!(dedup.effective_points(4, 3), 12);
    assert_eq!(dedup.effective_points(10, 10), 50);

    let template = make_template(4, 3);
    let fp = Fingerprint::sample(&template, &dedup, &mut StdRng::seed_from_u64(2));
    assert_eq!(fp.len(), dedup.effective_points(4, 3));
}

#[test]
#[should_panic(expected = "cannot fingerprint an empty")]
fn empty_template_is_rejected() {
    struct Empty;
    impl Raster for Empty {
        fn width(&self) -> usize {
            0
        }
        fn height(&self) -> usize {
            3
        }
        fn color_at(&self, _x: usize, _y: usize) -> Option<Color> {
            None
        }
    }
    let _ = Fingerprint::build(&Empty, 4);
}
