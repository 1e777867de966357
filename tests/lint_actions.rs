//! Lint: every action ID constant must be reachable from the UI.
//!
//! Click IDs are plain `u16` constants, so nothing stops a constant from
//! being defined in `actions.rs` while no render code ever registers a
//! target for it — the affordance silently disappears. This test scans the
//! sources and flags constants that neither the render layer nor the key
//! map references.

use std::fs;
use std::path::Path;

/// Extract `pub const NAME: u16` identifiers from actions.rs source text.
fn action_constants(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("pub const ") {
            if let Some((name, tail)) = rest.split_once(':') {
                if tail.trim_start().starts_with("u16") {
                    names.push(name.trim().to_string());
                }
            }
        }
    }
    names
}

/// Count whole-word occurrences of `name` in `source`, skipping its own
/// definition lines.
fn references(source: &str, name: &str) -> usize {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with("pub const "))
        .filter(|line| {
            line.match_indices(name).any(|(i, _)| {
                let before_ok = i == 0
                    || !source_char_is_ident(line.as_bytes().get(i.wrapping_sub(1)).copied());
                let after = line.as_bytes().get(i + name.len()).copied();
                before_ok && !source_char_is_ident(after)
            })
        })
        .count()
}

fn source_char_is_ident(byte: Option<u8>) -> bool {
    matches!(byte, Some(b) if b.is_ascii_alphanumeric() || b == b'_')
}

#[test]
fn every_action_constant_is_wired_to_the_ui() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let actions = fs::read_to_string(root.join("src/panel/actions.rs")).unwrap();
    let render = fs::read_to_string(root.join("src/panel/render.rs")).unwrap();
    let dispatcher = fs::read_to_string(root.join("src/panel/mod.rs")).unwrap();

    let constants = action_constants(&actions);
    assert!(
        !constants.is_empty(),
        "no action constants found — did actions.rs move?"
    );

    let mut unwired = Vec::new();
    for name in &constants {
        if references(&render, name) == 0 && references(&dispatcher, name) == 0 {
            unwired.push(name.clone());
        }
    }

    assert!(
        unwired.is_empty(),
        "action constants with no render target or key mapping: {unwired:?}"
    );
}

#[test]
fn extractor_recognizes_u16_constants_only() {
    let sample = "\
pub const CLEAR_HISTORY: u16 = 1;
pub const BAND: usize = 100;
const PRIVATE: u16 = 2;
pub const CALL_BASE: u16 = 200;
";
    assert_eq!(action_constants(sample), vec!["CLEAR_HISTORY", "CALL_BASE"]);
}

#[test]
fn reference_counter_matches_whole_words_only() {
    let source = "let x = CALL_BASE + idx;\nlet y = CALL_BASE_EXTRA;\n";
    assert_eq!(references(source, "CALL_BASE"), 1);
}
