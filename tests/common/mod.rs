//! Shared fixtures: a stand-in for `java -jar tabula.jar` and PDF trees

#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Behaves like tabula for ordinary file names: writes a two-line CSV to the
/// --outfile path. Names containing a marker word misbehave instead:
/// "broken" fails with a message, "latin" fails with non-UTF-8 stderr,
/// "empty" succeeds without writing, "slow" hangs in place and "hang" hangs
/// in a child process that outlives the script.
pub const FAKE_JAVA: &str = r#"#!/bin/sh
out=""
in=""
while [ $# -gt 0 ]; do
  case "$1" in
    --outfile) out="$2"; shift 2 ;;
    *) in="$1"; shift ;;
  esac
done
case "$in" in
  *broken*) echo "Error: could not parse $in" >&2; exit 1 ;;
  *latin*) printf 'Error: bad \377 name\n' >&2; exit 1 ;;
  *empty*) exit 0 ;;
  *slow*) exec sleep 30 ;;
  *hang*) sleep 8; exit 0 ;;
esac
printf 'name,value\n%s,1\n' "$(basename "$in")" > "$out"
"#;

/// Write the fake java script and an empty jar into `dir`, returning (java, jar)
#[cfg(unix)]
pub fn install_fake_tabula(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let java = dir.join("fake-java");
    fs::write(&java, FAKE_JAVA).unwrap();
    fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();

    let jar = dir.join("tabula.jar");
    File::create(&jar).unwrap();
    (java, jar)
}

/// Create empty files (and parent directories) under `root`
pub fn touch_all(root: &Path, names: &[&str]) {
    for name in names {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }
}
