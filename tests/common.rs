use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphkit() -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    // Keep the developer's own config out of the tests.
    cmd.env("GRAPHKIT_CONFIG_DIR", "/nonexistent/graphkit-tests")
        .env_remove("GRAPHKIT_CONFIG")
        .env_remove("GRAPHKIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub const TINY_G: &str = "13
13
0 5
4 3
0 1
9 12
6 4
5 4
0 2
11 12
9 10
0 6
7 8
9 11
5 3
";

#[allow(dead_code)]
pub const TINY_DG: &str = "13
22
 4  2
 2  3
 3  2
 6  0
 0  1
 2  0
11 12
12  9
 9 10
 9 11
 7  9
10 12
11  4
 4  3
 3  5
 6  8
 8  6
 5  4
 0  5
 6  4
 6  9
 7  6
";

#[allow(dead_code)]
pub const TINY_EWG: &str = "8
16
4 5 0.35
4 7 0.37
5 7 0.28
0 7 0.16
1 5 0.32
0 4 0.38
2 3 0.17
1 7 0.19
0 2 0.26
1 2 0.36
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

#[allow(dead_code)]
pub const TINY_EWDAG: &str = "8
13
5 4 0.35
4 7 0.37
5 7 0.28
5 1 0.32
4 0 0.38
0 2 0.26
3 7 0.39
1 3 0.29
7 2 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

#[allow(dead_code)]
pub const TINY_UF: &str = "10
4 3
3 8
6 5
9 4
2 1
8 9
5 0
7 2
6 1
1 0
6 7
";
