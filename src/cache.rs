// src/cache.rs

//! Build-cache seed converter
//!
//! Line-oriented converter from flat `NAME:TYPE=VALUE` records to CMake
//! cache-assignment statements, used to seed a build's variable cache from a
//! text file. Lines that do not match the record shape are skipped silently.

use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RECORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w-]+):([A-Za-z]+)=(.*)$").unwrap());

/// Convert matching records to `set(...)` statements, one per line.
pub fn convert(input: &str) -> String {
    let mut output = String::new();
    for line in input.lines() {
        if let Some(caps) = RECORD_RE.captures(line) {
            output.push_str(&format!(
                "set({} \"{}\" CACHE {} \"\" FORCE)\n",
                &caps[1], &caps[3], &caps[2]
            ));
        }
    }
    output
}

/// Convert `input` and write the result to `output`. Returns the number of
/// records emitted.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let text = fs::read_to_string(input)?;
    let converted = convert(&text);
    let records = converted.lines().count();
    fs::write(output, converted)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matching_records() {
        let input = "AE_DISTILLATION:BOOL=On\nCM_PLATFORM:STRING=ARDUINO\n";
        let output = convert(input);
        assert_eq!(
            output,
            "set(AE_DISTILLATION \"On\" CACHE BOOL \"\" FORCE)\n\
             set(CM_PLATFORM \"ARDUINO\" CACHE STRING \"\" FORCE)\n"
        );
    }

    #[test]
    fn test_non_matching_lines_are_skipped() {
        let input = "# comment\n\nNOT A RECORD\nNAME:BOOL=Off\n";
        let output = convert(input);
        assert_eq!(output, "set(NAME \"Off\" CACHE BOOL \"\" FORCE)\n");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let output = convert("FLAGS:STRING=-DA=1 -DB=2\n");
        assert_eq!(output, "set(FLAGS \"-DA=1 -DB=2\" CACHE STRING \"\" FORCE)\n");
    }
}
