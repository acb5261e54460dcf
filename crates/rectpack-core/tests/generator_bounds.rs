use rand::SeedableRng;
use rand::rngs::StdRng;
use rectpack_core::generator::{generate_rects, seeded_rng};

#[test]
fn sides_stay_in_half_open_range() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let rects = generate_rects(1_000, 10, 24, &mut rng);
    assert_eq!(rects.len(), 1_000);
    for r in &rects {
        assert!((10..24).contains(&r.w), "width {} out of range", r.w);
        assert!((10..24).contains(&r.h), "height {} out of range", r.h);
        assert!(!r.was_packed);
    }
    // Both ends of the range show up over a large sample.
    assert!(rects.iter().any(|r| r.w == 10));
    assert!(rects.iter().any(|r| r.w == 23));
}

#[test]
fn ids_are_sequential_from_one() {
    let (mut rng, _) = seeded_rng(Some(3));
    let rects = generate_rects(100, 10, 24, &mut rng);
    let ids: Vec<u32> = rects.iter().map(|r| r.id).collect();
    let expected: Vec<u32> = (1..=100).collect();
    assert_eq!(ids, expected);
}

#[test]
fn single_value_range() {
    let (mut rng, _) = seeded_rng(Some(9));
    let rects = generate_rects(20, 5, 6, &mut rng);
    assert!(rects.iter().all(|r| r.w == 5 && r.h == 5));
}
