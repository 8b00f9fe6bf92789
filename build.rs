// ScoreCrab - GPL-3.0-or-later
// Build script to embed the git revision into `--version`

use std::process::Command;

fn git_stdout(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
}

fn main() {
    let git_hash = git_stdout(&["rev-parse", "--short", "HEAD"])
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string());

    let is_dirty = git_stdout(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());

    let git_hash = if is_dirty {
        format!("{git_hash}-dirty")
    } else {
        git_hash
    };

    println!("cargo:rustc-env=GIT_HASH={git_hash}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
