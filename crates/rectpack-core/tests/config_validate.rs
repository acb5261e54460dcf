use std::path::PathBuf;

use rectpack_core::config::{DEFAULT_OUTPUT, OutlineStyle, RunConfig, SkylineHeuristic, SortOrder};
use rectpack_core::error::RectPackError;

#[test]
fn defaults_match_reference_run() {
    let cfg = RunConfig::default();
    assert_eq!((cfg.canvas_width, cfg.canvas_height), (256, 256));
    assert_eq!(cfg.node_budget, 256);
    assert_eq!(cfg.rect_count, 100);
    assert_eq!((cfg.min_side, cfg.max_side), (10, 24));
    assert_eq!(cfg.heuristic, SkylineHeuristic::BottomLeft);
    assert_eq!(cfg.sort_order, SortOrder::HeightDesc);
    assert_eq!(cfg.outline, OutlineStyle::Thick);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT));
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_side_range_is_rejected() {
    let cfg = RunConfig::builder().side_range(10, 10).build();
    match cfg.validate() {
        Err(RectPackError::InvalidConfig(msg)) => assert!(msg.contains("side range")),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn zero_min_side_is_rejected() {
    let cfg = RunConfig::builder().side_range(0, 5).build();
    assert!(matches!(cfg.validate(), Err(RectPackError::InvalidConfig(_))));
}

#[test]
fn zero_canvas_is_rejected() {
    let cfg = RunConfig::builder().with_canvas(0, 256).build();
    match cfg.validate() {
        Err(RectPackError::InvalidDimensions { width, height }) => {
            assert_eq!((width, height), (0, 256));
        }
        other => panic!("expected InvalidDimensions, got {other:?}"),
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn rect_count_past_id_range_is_rejected() {
    let count = u32::MAX as usize + 1;
    let cfg = RunConfig::builder().rect_count(count).build();
    match cfg.validate() {
        Err(RectPackError::InvalidConfig(msg)) => assert!(msg.contains("rect_count")),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn rect_count_at_id_limit_is_accepted() {
    let cfg = RunConfig::builder().rect_count(u32::MAX as usize).build();
    assert!(cfg.validate().is_ok());
}

#[test]
fn enums_parse_from_str() {
    assert_eq!("bl".parse(), Ok(SkylineHeuristic::BottomLeft));
    assert_eq!("best_fit".parse(), Ok(SkylineHeuristic::BestFit));
    assert_eq!("AREA_DESC".parse(), Ok(SortOrder::AreaDesc));
    assert_eq!("thin".parse(), Ok(OutlineStyle::Thin));
    assert!("diagonal".parse::<SortOrder>().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let cfg = RunConfig::builder()
        .seed(Some(5))
        .heuristic(SkylineHeuristic::BestFit)
        .output("out/atlas.png")
        .build();
    let text = serde_json::to_string(&cfg).expect("serialize");
    assert!(text.contains("\"best_fit\""));
    let back: RunConfig = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back.seed, Some(5));
    assert_eq!(back.heuristic, SkylineHeuristic::BestFit);
    assert_eq!(back.output, PathBuf::from("out/atlas.png"));
}
