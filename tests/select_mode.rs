mod common;

use common::{connected, init_logger, mode};
use modepick::{
    AspectClass, MIN_WIDTH, ModeId, SelectError, TARGET_HEIGHT, classify, filter_modes, rank,
    select_mode,
};

#[test]
fn test_classify() {
    let cases = [
        (640, 480, AspectClass::Standard),
        (1024, 768, AspectClass::Standard),
        (1280, 800, AspectClass::Widescreen),
        (1280, 720, AspectClass::Widescreen),
        (1920, 1080, AspectClass::Widescreen),
        (1366, 768, AspectClass::Widescreen),
        (2560, 1080, AspectClass::Widescreen),
        (3440, 1440, AspectClass::Widescreen),
        (1280, 1024, AspectClass::Unclassified),
        (3840, 1080, AspectClass::Unclassified),
        (720, 0, AspectClass::Unclassified),
    ];

    for (width, height, expected) in cases {
        assert_eq!(
            classify(&mode(1, width, height)),
            expected,
            "{}x{}",
            width,
            height
        );
    }
}

#[test]
fn test_filter_keeps_only_supported_widescreen() {
    init_logger();

    let catalog = vec![
        mode(1, 640, 360),
        mode(2, 1024, 768),
        mode(3, 1280, 720),
        mode(4, 1920, 1080),
        mode(5, 1920, 1200),
        mode(6, 1280, 1024),
        mode(7, 2560, 1080),
        mode(8, 1152, 648),
    ];
    let output = connected(1, "HDMI-1", &[1, 2, 3, 4, 6, 7, 8]);

    let filtered = filter_modes(&catalog, &output);
    let ids: Vec<ModeId> = filtered.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![ModeId(3), ModeId(4), ModeId(7), ModeId(8)]);

    for m in &filtered {
        assert!(m.width >= MIN_WIDTH, "{}", m);
        assert!(output.supports(m.id), "{}", m);
        assert!(classify(m).is_widescreen(), "{}", m);
    }
}

#[test]
fn test_filter_floor_is_on_width() {
    // 1152x648 is shorter than 720 but wide enough
    let output = connected(1, "DP-1", &[1, 2]);
    let filtered = filter_modes(&[mode(1, 1152, 648), mode(2, 704, 400)], &output);

    assert_eq!(filtered, vec![mode(1, 1152, 648)]);
}

#[test]
fn test_filter_uses_output_mode_list() {
    // the output's list is shorter than the catalog and in a different order
    let catalog = vec![
        mode(10, 1920, 1080),
        mode(11, 1280, 720),
        mode(12, 1680, 1050),
        mode(13, 1440, 900),
    ];
    let output = connected(1, "HDMI-1", &[13, 10]);

    let filtered = filter_modes(&catalog, &output);
    assert_eq!(filtered, vec![mode(10, 1920, 1080), mode(13, 1440, 900)]);
}

#[test]
fn test_rank_head_is_closest_to_target() {
    let modes = vec![
        mode(1, 2560, 1440),
        mode(2, 1920, 1080),
        mode(3, 1366, 768),
        mode(4, 1152, 648),
        mode(5, 1600, 900),
    ];

    let ranked = rank(modes.clone());
    assert_eq!(ranked[0], mode(3, 1366, 768));

    let head = ranked[0].height.abs_diff(TARGET_HEIGHT);
    for m in &modes {
        assert!(head <= m.height.abs_diff(TARGET_HEIGHT), "{}", m);
    }

    let distances: Vec<u32> = ranked
        .iter()
        .map(|m| m.height.abs_diff(TARGET_HEIGHT))
        .collect();
    assert_eq!(distances, vec![48, 72, 180, 360, 720]);
}

#[test]
fn test_rank_ties_keep_input_order() {
    let ranked = rank(vec![mode(11, 1920, 1080), mode(12, 2560, 1080)]);
    assert_eq!(ranked[0].id, ModeId(11));

    let ranked = rank(vec![mode(12, 2560, 1080), mode(11, 1920, 1080)]);
    assert_eq!(ranked[0].id, ModeId(12));
}

#[test]
fn test_rank_empty() {
    assert!(rank(Vec::new()).is_empty());
}

#[test]
fn test_select_mode_exact_target() {
    init_logger();

    let catalog = vec![mode(1, 1920, 1080), mode(2, 1280, 720), mode(3, 1280, 800)];
    let output = connected(1, "HDMI-1", &[1, 2, 3]);

    assert_eq!(select_mode(&catalog, &output), Ok(mode(2, 1280, 720)));
}

#[test]
fn test_select_mode_no_usable_mode() {
    init_logger();

    let catalog = vec![mode(1, 640, 480), mode(2, 1024, 768), mode(3, 1280, 1024)];
    let output = connected(1, "VGA-1", &[1, 2, 3]);

    assert_eq!(
        select_mode(&catalog, &output),
        Err(SelectError::NoUsableMode("VGA-1".to_string()))
    );
}
