//! Integration tests for the graphkit CLI
//!
//! These tests run the graphkit binary against small edge-list files.

mod common;

use common::{graphkit, write_graph, TINY_DG, TINY_EWDAG, TINY_EWG, TINY_G, TINY_UF};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help, version and global flags
// ============================================================================

#[test]
fn test_help_flag() {
    graphkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphkit"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("scc"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    graphkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphkit"));
}

#[test]
fn test_no_command_prints_banner() {
    graphkit()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphkit"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphkit().args(["--format", "xml", "cc"]).assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    graphkit()
        .args(["--format", "json", "cc", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "tinyG.txt", TINY_G);

    graphkit()
        .arg("--verbose")
        .arg("cc")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "tinyG.txt", TINY_G);

    graphkit()
        .arg("cc")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Input handling and errors
// ============================================================================

#[test]
fn test_reads_stdin() {
    graphkit()
        .arg("stats")
        .write_stdin(TINY_G)
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 13"))
        .stdout(predicate::str::contains("edges: 13"))
        .stdout(predicate::str::contains("max degree: 4"));
}

#[test]
fn test_missing_file_is_failure() {
    graphkit()
        .args(["cc", "/nonexistent/graph.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_malformed_input_is_data_error() {
    graphkit()
        .arg("cc")
        .write_stdin("3 x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_negative_count_is_data_error() {
    graphkit()
        .arg("cc")
        .write_stdin("-3 0")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number of vertices"));
}

#[test]
fn test_unallocatable_vertex_count_is_data_error() {
    graphkit()
        .arg("cc")
        .write_stdin("3000000000000000000 0")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number of vertices"));

    graphkit()
        .arg("uf")
        .write_stdin("3000000000000000000")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number of sites"));

    graphkit()
        .args(["generate", "dag", "-n", "3000000000000000000", "-e", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number of vertices"));
}

#[test]
fn test_trailing_tokens_are_data_error() {
    graphkit()
        .arg("cc")
        .write_stdin("3 1\n0 1\n2 2\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("trailing token"));
}

#[test]
fn test_source_out_of_range() {
    graphkit()
        .args(["paths", "--source", "99"])
        .write_stdin(TINY_G)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex 99 is not between 0 and 12"));
}

#[test]
fn test_json_error_envelope() {
    graphkit()
        .args(["--format", "json", "sp", "--source", "0"])
        .write_stdin("3 3 0 1 1.0 1 2 1.0 2 0 1.0")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"not_acyclic\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    graphkit()
        .args(["--quiet", "cc"])
        .write_stdin("3 x")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Analyses
// ============================================================================

#[test]
fn test_paths_bfs() {
    graphkit()
        .args(["paths", "--source", "0", "--bfs"])
        .write_stdin(TINY_G)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 to 4 (2): 0 5 4"))
        .stdout(predicate::str::contains("0 to 7: not connected"));
}

#[test]
fn test_paths_dfs_json() {
    let output = graphkit()
        .args(["--format", "json", "paths", "-s", "9"])
        .write_stdin(TINY_G)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["search"], "dfs");
    assert_eq!(json["paths"].as_array().unwrap().len(), 13);
    assert_eq!(json["paths"][9]["path"], serde_json::json!([9]));
    assert!(json["paths"][0]["path"].is_null());
}

#[test]
fn test_undirected_cycle() {
    let output = graphkit()
        .args(["--format", "json", "cycle"])
        .write_stdin("5 5 0 1 1 2 2 3 3 4 4 0")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["has_cycle"], true);
    let cycle = json["cycle"].as_array().unwrap();
    assert_eq!(cycle.len(), 6);
    assert_eq!(cycle.first(), cycle.last());
}

#[test]
fn test_acyclic_digraph_reports_no_cycle() {
    graphkit()
        .args(["cycle", "--directed"])
        .write_stdin("4 4 0 1 0 2 1 3 2 3")
        .assert()
        .success()
        .stdout("no cycle\n");
}

#[test]
fn test_weighted_cycle_lists_edges() {
    graphkit()
        .args(["cycle", "--weighted"])
        .write_stdin("3 3 0 1 0.5 1 2 0.25 2 0 1.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle: 0 1 2 0"))
        .stdout(predicate::str::contains("1->2  0.25"));
}

#[test]
fn test_topological_order() {
    graphkit()
        .arg("topo")
        .write_stdin("4 4 0 1 0 2 1 3 2 3")
        .assert()
        .success()
        .stdout("0 2 1 3\n");
}

#[test]
fn test_cyclic_digraph_has_no_order() {
    graphkit()
        .arg("topo")
        .write_stdin("3 3 0 1 1 2 2 0")
        .assert()
        .success()
        .stdout(predicate::str::contains("no topological order"));
}

#[test]
fn test_connected_components() {
    graphkit()
        .arg("cc")
        .write_stdin(TINY_G)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 components\n"))
        .stdout(predicate::str::contains("0 1 2 3 4 5 6\n"))
        .stdout(predicate::str::contains("7 8\n"))
        .stdout(predicate::str::contains("9 10 11 12\n"));
}

#[test]
fn test_every_scc_algorithm_agrees() {
    for algorithm in ["kosaraju", "tarjan", "gabow"] {
        let output = graphkit()
            .args(["--format", "json", "scc", "--algorithm", algorithm])
            .write_stdin(TINY_DG)
            .output()
            .unwrap();
        assert!(output.status.success(), "{algorithm}");

        let json = json_stdout(&output);
        assert_eq!(json["algorithm"], algorithm);
        assert_eq!(json["count"], 5);
        let mut components: Vec<Vec<u64>> = json["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_array().unwrap().iter().map(|v| v.as_u64().unwrap()).collect())
            .collect();
        components.sort();
        assert_eq!(
            components,
            vec![vec![0, 2, 3, 4, 5], vec![1], vec![6, 8], vec![7], vec![9, 10, 11, 12]]
        );
    }
}

#[test]
fn test_unknown_scc_algorithm() {
    graphkit()
        .args(["scc", "--algorithm", "dijkstra"])
        .write_stdin(TINY_DG)
        .assert()
        .code(2);
}

#[test]
fn test_transitive_closure_json() {
    let output = graphkit()
        .args(["--format", "json", "closure"])
        .write_stdin("3 2 0 1 1 2")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["reachable"][0], serde_json::json!([0, 1, 2]));
    assert_eq!(json["reachable"][2], serde_json::json!([2]));
}

#[test]
fn test_shortest_paths() {
    graphkit()
        .args(["sp", "--source", "5"])
        .write_stdin(TINY_EWDAG)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 to 6 (1.13)"))
        .stdout(predicate::str::contains("5 to 2 (0.62)"));
}

#[test]
fn test_longest_paths() {
    graphkit()
        .args(["sp", "--source", "5", "--longest"])
        .write_stdin(TINY_EWDAG)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 to 2 (2.77)"))
        .stdout(predicate::str::contains("5 to 0 (2.44)"));
}

#[test]
fn test_unreachable_vertex_has_no_path() {
    let output = graphkit()
        .args(["--format", "json", "sp", "--source", "6"])
        .write_stdin(TINY_EWDAG)
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert!(json["paths"][5]["distance"].is_null());
    assert!(json["paths"][5]["path"].is_null());
    assert_eq!(json["paths"][6]["distance"], 0.0);
}

#[test]
fn test_minimum_spanning_tree() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "tinyEWG.txt", TINY_EWG);

    graphkit()
        .arg("mst")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("0-7 0.16000"))
        .stdout(predicate::str::ends_with("1.81000\n"));
}

#[test]
fn test_union_find() {
    for algorithm in ["rank", "weighted", "quick-union", "quick-find"] {
        let output = graphkit()
            .args(["--format", "json", "uf", "--algorithm", algorithm])
            .write_stdin(TINY_UF)
            .output()
            .unwrap();
        let json = json_stdout(&output);
        assert_eq!(json["components"], 2, "{algorithm}");
        assert_eq!(json["unions"].as_array().unwrap().len(), 8);
    }

    graphkit()
        .arg("uf")
        .write_stdin(TINY_UF)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("4 3\n3 8\n6 5\n9 4\n2 1\n5 0\n"))
        .stdout(predicate::str::ends_with("2 components\n"));
}

// ============================================================================
// Generation and configuration
// ============================================================================

#[test]
fn test_generate_is_reproducible_and_parseable() {
    let first = graphkit()
        .args(["generate", "graph", "-n", "10", "-e", "20", "--seed", "7"])
        .output()
        .unwrap();
    let second = graphkit()
        .args(["generate", "graph", "-n", "10", "-e", "20", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert_eq!(text.lines().count(), 22);

    graphkit()
        .arg("stats")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains("edges: 20"))
        .stdout(predicate::str::contains("self-loops: 0"));
}

#[test]
fn test_generated_dag_has_order() {
    let dag = graphkit()
        .args(["generate", "weighted-dag", "-n", "12", "-e", "30", "--seed", "3"])
        .output()
        .unwrap();
    assert!(dag.status.success());

    graphkit()
        .args(["topo", "--weighted"])
        .write_stdin(dag.stdout.clone())
        .assert()
        .success()
        .stdout(predicate::str::contains("no topological order").not());

    graphkit()
        .args(["sp", "--source", "0"])
        .write_stdin(dag.stdout)
        .assert()
        .success();
}

#[test]
fn test_generate_rejects_too_many_edges() {
    graphkit()
        .args(["generate", "dag", "-n", "4", "-e", "7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid number of edges"));
}

#[test]
fn test_config_file_sets_format_and_seed() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "config.toml", "format = \"json\"\nseed = 7\n");

    let from_config = graphkit()
        .env("GRAPHKIT_CONFIG_DIR", dir.path())
        .args(["generate", "digraph", "-n", "6", "-e", "8"])
        .output()
        .unwrap();
    let json = json_stdout(&from_config);
    assert_eq!(json["seed"], 7);
    assert_eq!(json["kind"], "digraph");
    assert_eq!(json["edges"].as_array().unwrap().len(), 8);

    // Flags beat the config file.
    graphkit()
        .env("GRAPHKIT_CONFIG_DIR", dir.path())
        .args(["--format", "human", "generate", "digraph", "-n", "6", "-e", "8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("6\n8\n"));
}

#[test]
fn test_explicit_config_must_exist() {
    graphkit()
        .args(["--config", "/nonexistent/config.toml", "cc"])
        .write_stdin(TINY_G)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "broken.toml", "format = [");

    graphkit()
        .arg("--config")
        .arg(&config)
        .arg("cc")
        .write_stdin(TINY_G)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
