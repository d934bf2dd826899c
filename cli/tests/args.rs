use clap::Parser;
use mazepath::{Args, Strategy};
use mazepath_core::Algorithm;
use std::path::PathBuf;

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["mazepath", "maze.txt"]).unwrap();

    assert_eq!(args.maze_file, PathBuf::from("maze.txt"));
    assert_eq!(args.algorithm, Strategy::Both);
    assert!(!args.json);
    assert!(!args.verbose);
    assert!(!args.quiet);
}

#[test]
fn test_args_algorithm_flag() {
    let args = Args::try_parse_from(["mazepath", "-a", "dfs", "--json", "maze.txt"]).unwrap();
    assert_eq!(args.algorithm, Strategy::Dfs);
    assert!(args.json);

    let args = Args::try_parse_from(["mazepath", "--algorithm", "bfs", "-q", "maze.txt"]).unwrap();
    assert_eq!(args.algorithm, Strategy::Bfs);
    assert!(args.quiet);
}

#[test]
fn test_args_reject_unknown_algorithm() {
    assert!(Args::try_parse_from(["mazepath", "-a", "astar", "maze.txt"]).is_err());
    assert!(Args::try_parse_from(["mazepath"]).is_err());
}

#[test]
fn test_strategy_algorithms_run_dfs_before_bfs() {
    assert_eq!(Strategy::Dfs.algorithms(), vec![Algorithm::Dfs]);
    assert_eq!(Strategy::Bfs.algorithms(), vec![Algorithm::Bfs]);
    assert_eq!(Strategy::Both.algorithms(), vec![Algorithm::Dfs, Algorithm::Bfs]);
}
