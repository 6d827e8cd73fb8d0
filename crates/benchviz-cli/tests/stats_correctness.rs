// Dweve BenchViz - Benchmark Visualization Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Exact-output checks for the statistics report.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn benchviz_cmd() -> Command {
    Command::cargo_bin("benchviz").expect("Failed to find benchviz binary")
}

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("benchmark_insert.csv"),
        "size,best,average,worst\n10,12.0,20.0,30.0\n100,10.0,25.0,45.0\n1000,15.0,40.0,60.0\n",
    )
    .expect("Failed to write insert fixture");
    fs::write(
        dir.join("benchmark_find.csv"),
        "size,best,average,worst\n10,5.0,8.0,12.0\n100,6.0,10.0,18.0\n1000,7.0,14.0,21.0\n",
    )
    .expect("Failed to write find fixture");
    fs::write(
        dir.join("benchmark_remove.csv"),
        "size,best,average,worst\n10,8.0,12.0,16.0\n100,9.0,15.0,27.0\n1000,11.0,22.0,44.0\n",
    )
    .expect("Failed to write remove fixture");
}

fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_fixture(dir.path());
    dir
}

#[test]
fn test_text_report_exact_content() {
    let dir = fixture_dir();

    benchviz_cmd()
        .arg("stats")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("benchmark_statistics.txt"))
        .expect("Failed to read report");

    let expected = "\
=== AVL H-Tree Performance Statistics ===

INSERT Operation:
  Size range: 10 - 1000 elements
  Best case:    10.00 - 15.00 ns
  Average case: 20.00 - 40.00 ns
  Worst case:   30.00 - 60.00 ns
  Worst/Best ratio at max size: 4.00x

FIND Operation:
  Size range: 10 - 1000 elements
  Best case:    5.00 - 7.00 ns
  Average case: 8.00 - 14.00 ns
  Worst case:   12.00 - 21.00 ns
  Worst/Best ratio at max size: 3.00x

REMOVE Operation:
  Size range: 10 - 1000 elements
  Best case:    8.00 - 11.00 ns
  Average case: 12.00 - 22.00 ns
  Worst case:   16.00 - 44.00 ns
  Worst/Best ratio at max size: 4.00x

";
    assert_eq!(report, expected);
}

#[test]
fn test_json_report_values() {
    let dir = fixture_dir();

    let output = benchviz_cmd()
        .arg("stats")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("Invalid JSON from stats");

    assert_eq!(json[0]["operation"], "insert");
    assert_eq!(json[0]["size_min"], 10);
    assert_eq!(json[0]["size_max"], 1000);
    assert_eq!(json[0]["best_min"], 10.0);
    assert_eq!(json[0]["best_max"], 15.0);
    assert_eq!(json[0]["worst_best_ratio"], 4.0);

    assert_eq!(json[1]["operation"], "find");
    assert_eq!(json[1]["worst_min"], 12.0);
    assert_eq!(json[1]["worst_max"], 21.0);
    assert_eq!(json[1]["worst_best_ratio"], 3.0);

    assert_eq!(json[2]["operation"], "remove");
    assert_eq!(json[2]["average_min"], 12.0);
    assert_eq!(json[2]["average_max"], 22.0);
    assert_eq!(json[2]["worst_best_ratio"], 4.0);
}
