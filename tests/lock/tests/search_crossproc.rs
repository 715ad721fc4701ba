//! Cross-process determinism of search runs.
//!
//! Spawns `search_fixture` under several working directories and
//! environments; stdout must be byte-identical across all of them.

use std::path::PathBuf;
use std::process::Command;

/// `target/<profile>/search_fixture`, next to the `deps/` dir holding this test.
fn fixture_binary() -> PathBuf {
    let test_exe = std::env::current_exe().expect("current_exe");
    let profile_dir = test_exe
        .ancestors()
        .nth(2)
        .expect("test binary lives in target/<profile>/deps");
    profile_dir.join(format!("search_fixture{}", std::env::consts::EXE_SUFFIX))
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .expect("workspace root exists")
}

struct Variant {
    name: &'static str,
    cwd: PathBuf,
    env: &'static [(&'static str, &'static str)],
}

fn fixture_output(variant: &Variant) -> String {
    let bin = fixture_binary();
    let output = Command::new(&bin)
        .current_dir(&variant.cwd)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG")
        .envs(variant.env.iter().copied())
        .output()
        .unwrap_or_else(|e| panic!("spawning {} for {}: {e}", bin.display(), variant.name));
    assert!(
        output.status.success(),
        "{} variant: fixture exited with {}; stderr:\n{}",
        variant.name,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("fixture stdout is UTF-8")
}

/// Lines following `run=<label>` up to the next run header.
fn run_block<'a>(output: &'a str, label: &str) -> Vec<&'a str> {
    let header = format!("run={label}");
    output
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.starts_with("run="))
        .collect()
}

#[test]
fn fixture_output_is_environment_independent() {
    let root = workspace_root();
    let variants = [
        Variant {
            name: "baseline",
            cwd: root.clone(),
            env: &[],
        },
        Variant {
            name: "temp cwd",
            cwd: std::env::temp_dir(),
            env: &[],
        },
        Variant {
            name: "C locale",
            cwd: root.clone(),
            env: &[("LC_ALL", "C"), ("LANG", "C")],
        },
        Variant {
            name: "noisy env",
            cwd: root,
            env: &[
                ("TESSERA_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
                ("RUST_LOG", "trace"),
            ],
        },
    ];

    let baseline = fixture_output(&variants[0]);

    assert!(baseline.contains("start_fingerprint=sha256:"));
    assert_eq!(baseline.matches("termination_reason=goal_reached").count(), 8);
    assert_eq!(baseline.matches("record_digest=sha256:").count(), 8);

    let bfs = run_block(&baseline, "BFS");
    assert!(bfs.contains(&"path_cost=11"), "BFS block: {bfs:?}");
    assert!(bfs.contains(&"nodes_expanded=884"), "BFS block: {bfs:?}");
    let astar = run_block(&baseline, "A* (manhattan)");
    assert!(astar.contains(&"depth=11"), "A* block: {astar:?}");
    assert!(astar.contains(&"nodes_expanded=53"), "A* block: {astar:?}");

    for variant in &variants[1..] {
        assert_eq!(
            fixture_output(variant),
            baseline,
            "fixture output changed under the {} variant",
            variant.name
        );
    }
}
