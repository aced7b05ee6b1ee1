use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub fn tangle() -> Command {
    cargo_bin_cmd!("tangle")
}

/// A command already pointed at the store under `root`
pub fn tangle_at(root: &Path) -> Command {
    let mut cmd = tangle();
    cmd.arg("--root").arg(root);
    cmd
}

/// Initialize a store and build the branching example graph:
/// nodes 1..=4, edges (1,2), (2,3), (2,4)
#[allow(dead_code)]
pub fn seed_branching_graph(root: &Path, name: &str, directed: bool) {
    tangle_at(root).arg("init").assert().success();

    let mut create = tangle_at(root);
    create.arg("create").arg(name);
    if directed {
        create.arg("--directed");
    }
    create.assert().success();

    for id in 1..=4 {
        tangle_at(root)
            .args(["node", "add", name, "--id"])
            .arg(id.to_string())
            .assert()
            .success();
    }
    for (a, b) in [(1, 2), (2, 3), (2, 4)] {
        tangle_at(root)
            .args(["edge", "add", name])
            .arg(a.to_string())
            .arg(b.to_string())
            .assert()
            .success();
    }
}
