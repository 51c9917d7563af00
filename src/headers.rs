// src/headers.rs

//! Umbrella header generation
//!
//! Emits a single aggregate header that includes every header under the
//! copied library subtree, so consumers get the whole library from one
//! include. Directives are grouped by source directory with a separating
//! blank line, wrapped in a copyright preamble and a single include guard.
//! The output file is overwritten unconditionally on every run.

use crate::error::Result;
use crate::resolver::forward_slashes;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const PREAMBLE: &str = "/*\n\
 * Copyright 2024 Aethernet Inc.\n\
 *\n\
 * Licensed under the Apache License, Version 2.0 (the \"License\");\n\
 * you may not use this file except in compliance with the License.\n\
 * You may obtain a copy of the License at\n\
 *\n\
 *     http://www.apache.org/licenses/LICENSE-2.0\n\
 *\n\
 * Unless required by applicable law or agreed to in writing, software\n\
 * distributed under the License is distributed on an \"AS IS\" BASIS,\n\
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n\
 * See the License for the specific language governing permissions and\n\
 * limitations under the License.\n\
 */\n";

/// Walk `source_root` and write an umbrella header to `output_file`, with
/// every include path expressed relative to `relative_to`.
///
/// Returns the number of headers included. Directories are visited in sorted
/// order so repeated runs over an unchanged tree produce identical output.
pub fn generate(source_root: &Path, output_file: &Path, relative_to: &Path) -> Result<usize> {
    let guard = guard_name(output_file);

    let mut body = String::new();
    let mut included = 0;

    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let mut headers: Vec<String> = Vec::new();
        for child in fs::read_dir(entry.path())? {
            let child = child?;
            let name = child.file_name().to_string_lossy().into_owned();
            if child.file_type()?.is_file() && is_header(&name) {
                headers.push(name);
            }
        }
        if headers.is_empty() {
            continue;
        }
        headers.sort();

        for name in &headers {
            let path = entry.path().join(name);
            let relative = path.strip_prefix(relative_to).unwrap_or(&path);
            body.push_str("#include \"");
            body.push_str(&forward_slashes(relative));
            body.push_str("\"\n");
        }
        body.push('\n');
        included += headers.len();
    }

    let mut output = String::from(PREAMBLE);
    output.push('\n');
    output.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    output.push_str(&body);
    output.push_str(&format!("#endif  // {guard}\n"));

    fs::write(output_file, output)?;
    debug!(
        "Generated {} with {} header(s)",
        output_file.display(),
        included
    );

    Ok(included)
}

fn is_header(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| matches!(ext.to_string_lossy().as_ref(), "h" | "hpp" | "hh"))
}

/// Derive the include-guard macro from the output file name:
/// `aether_headers.h` becomes `AETHER_HEADERS_H_`.
fn guard_name(output_file: &Path) -> String {
    let name = output_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    guard.push('_');
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_guard_name_from_file_name() {
        assert_eq!(guard_name(Path::new("aether_headers.h")), "AETHER_HEADERS_H_");
        assert_eq!(guard_name(Path::new("out/my-lib.hpp")), "MY_LIB_HPP_");
    }

    #[test]
    fn test_is_header_extensions() {
        assert!(is_header("a.h"));
        assert!(is_header("b.hpp"));
        assert!(is_header("c.hh"));
        assert!(!is_header("d.c"));
        assert!(!is_header("e.cpp"));
        assert!(!is_header("noext"));
    }

    #[test]
    fn test_generate_groups_by_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src.join("aether/a/x.h"));
        touch(&src.join("aether/a/y.h"));
        touch(&src.join("aether/a/impl.cpp"));
        touch(&src.join("aether/b/z.h"));
        let output = src.join("aether_headers.h");

        let included = generate(&src.join("aether"), &output, &src).unwrap();
        assert_eq!(included, 3);

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.matches("#include \"").count(), 3);
        assert_eq!(text.matches("#ifndef AETHER_HEADERS_H_").count(), 1);
        assert_eq!(text.matches("#define AETHER_HEADERS_H_").count(), 1);
        assert_eq!(text.matches("#endif").count(), 1);
        assert!(text.contains("#include \"aether/a/x.h\"\n#include \"aether/a/y.h\"\n\n"));
        assert!(text.contains("#include \"aether/b/z.h\"\n\n"));
        assert!(!text.contains("impl.cpp"));
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src.join("aether/x.h"));
        let output = src.join("aether_headers.h");
        fs::write(&output, "stale content").unwrap();

        generate(&src.join("aether"), &output, &src).unwrap();
        let text = fs::read_to_string(&output).unwrap();
        assert!(!text.contains("stale content"));
        assert!(text.contains("#include \"aether/x.h\""));
    }
}
