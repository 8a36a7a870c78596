use std::path::Path;
use std::process::Command;

fn main() {
    let hash = git_output(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=PAINTBOARD_GIT_HASH={hash}");

    // Rebuild when HEAD moves so the embedded hash stays current.
    if let Some(git_dir) = git_output(&["rev-parse", "--git-dir"]) {
        for entry in ["HEAD", "refs", "packed-refs"] {
            let path = Path::new(&git_dir).join(entry);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}
