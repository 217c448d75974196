use super::*;

fn expected_valid(level: RaidLevel, disks: usize) -> bool {
    match level {
        RaidLevel::Raid0 | RaidLevel::Raid1 => disks >= 2,
        RaidLevel::Raid5 => disks >= 3,
        RaidLevel::Raid6 => disks >= 4,
        RaidLevel::Raid10 => disks >= 4 && disks % 2 == 0 && disks <= 32,
    }
}

#[test]
fn construction_matches_level_table_exhaustively() {
    for level in RaidLevel::ALL {
        for disks in 0..=40 {
            let got = ArrayConfig::new(level, disks);
            assert_eq!(
                got.is_ok(),
                expected_valid(level, disks),
                "RAID {level} with {disks} disks"
            );
            if let Err(err) = got {
                assert!(matches!(err, RaidError::Config(_)), "{err}");
            }
        }
    }
}

#[test]
fn raid6_rejects_widths_without_distinct_coefficients() {
    assert!(ArrayConfig::new(RaidLevel::Raid6, 255).is_ok());
    assert!(matches!(
        ArrayConfig::new(RaidLevel::Raid6, 256),
        Err(RaidError::Config(_))
    ));
}

#[test]
fn level_parses_and_displays_document_form() {
    for level in RaidLevel::ALL {
        let parsed: RaidLevel = level.as_str().parse().expect("parse");
        assert_eq!(parsed, level);
        assert_eq!(level.to_string(), level.as_str());
    }
    assert!(matches!("4".parse::<RaidLevel>(), Err(RaidError::Config(_))));
    assert!(matches!("raid5".parse::<RaidLevel>(), Err(RaidError::Config(_))));
}

#[test]
fn level_serializes_as_string() {
    let json = serde_json::to_string(&RaidLevel::Raid10).expect("serialize");
    assert_eq!(json, "\"10\"");
    let back: RaidLevel = serde_json::from_str("\"6\"").expect("deserialize");
    assert_eq!(back, RaidLevel::Raid6);
    assert!(serde_json::from_str::<RaidLevel>("\"3\"").is_err());
}

#[test]
fn stripe_size_and_write_limit_follow_level() {
    let cases = [
        (RaidLevel::Raid0, 4, 3),
        (RaidLevel::Raid0, 2, 1),
        (RaidLevel::Raid1, 3, 2),
        (RaidLevel::Raid5, 3, 2),
        (RaidLevel::Raid6, 6, 4),
        (RaidLevel::Raid10, 8, 4),
    ];
    for (level, disks, stripe) in cases {
        let cfg = ArrayConfig::new(level, disks).expect("valid");
        assert_eq!(cfg.stripe_size(), stripe, "RAID {level}");
        assert_eq!(cfg.write_limit(), stripe * WRITE_LIMIT_STRIPES);
    }
}
