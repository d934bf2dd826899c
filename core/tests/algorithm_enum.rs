use mazepath_core::Algorithm;

#[test]
fn test_algorithm_enum_default() {
    assert_eq!(Algorithm::default(), Algorithm::Bfs);
}

#[test]
fn test_algorithm_from_str() {
    assert_eq!(Algorithm::from("bfs"), Algorithm::Bfs);
    assert_eq!(Algorithm::from("BFS"), Algorithm::Bfs);
    assert_eq!(Algorithm::from("dfs"), Algorithm::Dfs);
    assert_eq!(Algorithm::from("DFS"), Algorithm::Dfs);
    assert_eq!(Algorithm::from("unknown"), Algorithm::Bfs); // Default to BFS
}

#[test]
fn test_algorithm_from_string() {
    assert_eq!(Algorithm::from("bfs".to_string()), Algorithm::Bfs);
    assert_eq!(Algorithm::from("dfs".to_string()), Algorithm::Dfs);
}

#[test]
fn test_algorithm_as_str_and_display() {
    assert_eq!(Algorithm::Bfs.as_str(), "bfs");
    assert_eq!(Algorithm::Dfs.as_str(), "dfs");
    assert_eq!(Algorithm::Dfs.to_string(), "dfs");
}

#[test]
fn test_algorithm_serde_round_trip() {
    assert_eq!(serde_json::to_string(&Algorithm::Bfs).unwrap(), r#""bfs""#);
    assert_eq!(serde_json::to_string(&Algorithm::Dfs).unwrap(), r#""dfs""#);

    let dfs: Algorithm = serde_json::from_str(r#""dfs""#).unwrap();
    assert_eq!(dfs, Algorithm::Dfs);
}
