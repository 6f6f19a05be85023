// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Spore (@s-cerevisiae)

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

pub fn pretty_path(path: &Utf8Path) -> String {
    let mut segments = Vec::new();
    for c in path.components() {
        match c {
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::CurDir => (),
            Utf8Component::ParentDir => {
                segments.pop();
            }
            Utf8Component::Normal(_) => segments.push(c.as_str()),
        }
    }
    segments.join("/")
}

/// Where the converted form of `file` goes: its path relative to `root`,
/// moved under `output` with the extension replaced.
///
/// When `file` is `root` itself only the file name is kept.
pub fn output_path(root: &Utf8Path, file: &Utf8Path, output: &Utf8Path, ext: &str) -> Utf8PathBuf {
    let relative = match file.strip_prefix(root) {
        Ok(relative) if !relative.as_str().is_empty() => relative,
        _ => Utf8Path::new(file.file_name().unwrap_or(file.as_str())),
    };
    output.join(relative).with_extension(ext)
}
