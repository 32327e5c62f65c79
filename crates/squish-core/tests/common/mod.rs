// crates/squish-core/tests/common/mod.rs
//
// Shared helpers for the squish-core integration tests.
#![allow(dead_code)]


use squish_core::{squish_bytes, SquishConfig};

/// Line-at-a-time model of squish: split into records, glue a record onto
/// the previous output line (minus its key) when the keys are equal.
pub fn naive_squish(data: &[u8], delimiter: u8, terminator: u8) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&[u8]> = data.split(|&b| b == terminator).collect();
    let mut results: Vec<Vec<u8>> = vec![lines[0].to_vec()];
    let mut current_key = key_for(lines[0], delimiter);

    for line in &lines[1..] {
        let line_key = key_for(line, delimiter);
        if line_key == current_key {
            let last = results.last_mut().expect("results never empty");
            last.extend_from_slice(&line[current_key.len()..]);
        } else {
            results.push(line.to_vec());
            current_key = line_key;
        }
    }

    results.join(&[terminator][..])
}

pub fn key_for(line: &[u8], delimiter: u8) -> &[u8] {
    match line.iter().position(|&b| b == delimiter) {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Squish with the default separators.
pub fn squish(data: &[u8]) -> Vec<u8> {
    squish_bytes(data, SquishConfig::default()).expect("squish")
}

pub fn squish_with(data: &[u8], delimiter: u8, terminator: u8) -> Vec<u8> {
    let cfg = SquishConfig::new(delimiter, terminator).expect("valid config");
    squish_bytes(data, cfg).expect("squish")
}

/// Render bytes for assertion messages.
pub fn show(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}
