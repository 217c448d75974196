use super::*;

#[test]
fn simulate_parses_level_and_failure_list() {
    let cli = Cli::try_parse_from([
        "raid-cli", "simulate", "--raid", "6", "--disks", "5", "--data", "hello", "--fail", "1,3",
    ])
    .unwrap();

    let Command::Simulate(args) = cli.command else {
        panic!("expected simulate");
    };
    assert_eq!(args.array.raid, RaidMode::Raid6);
    assert_eq!(args.array.disks, 5);
    assert_eq!(args.data, "hello");
    assert_eq!(args.fail, vec![1, 3]);
    assert!(args.save.is_none());
    assert!(!cli.trace_ops);
}

#[test]
fn level_aliases_map_to_engine_levels() {
    let cli =
        Cli::try_parse_from(["raid-cli", "create", "--raid", "raid10", "--disks", "4"]).unwrap();
    let Command::Create(args) = cli.command else {
        panic!("expected create");
    };
    assert_eq!(RaidLevel::from(args.array.raid), RaidLevel::Raid10);
}

#[test]
fn fail_requires_disk_list() {
    assert!(Cli::try_parse_from(["raid-cli", "fail"]).is_err());

    let cli = Cli::try_parse_from([
        "raid-cli",
        "fail",
        "--disks",
        "0",
        "--state",
        "s.json",
        "--trace-ops",
    ])
    .unwrap();
    assert!(cli.trace_ops);
    let Command::Fail(args) = cli.command else {
        panic!("expected fail");
    };
    assert_eq!(args.disks, vec![0]);
    assert_eq!(args.state.state, PathBuf::from("s.json"));
}

#[test]
fn unknown_level_is_rejected() {
    assert!(Cli::try_parse_from(["raid-cli", "create", "--raid", "4"]).is_err());
}
