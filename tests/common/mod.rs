#![allow(dead_code)]

use std::fs;

use symtags_lsp::{Backend, Settings, YamlDocument};

pub fn create_test_backend() -> Backend {
    Backend::new_test()
}

/// Parse a YAML snippet into a document, panicking on failure.
pub fn parse(text: &str) -> YamlDocument {
    YamlDocument::parse(text).expect("failed to parse YAML fixture")
}

/// Split a fixture containing a `<caret>` marker into the clean text
/// and the marker's byte offset.
pub fn caret(text: &str) -> (String, usize) {
    let offset = text.find("<caret>").expect("fixture has no <caret> marker");
    let clean = text.replacen("<caret>", "", 1);
    (clean, offset)
}

/// Helper: create a temp workspace populated with the given files and
/// return a Backend whose service index was built from it.
pub fn create_config_workspace(files: &[(&str, &str)]) -> (Backend, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for (rel_path, content) in files {
        let full = dir.path().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full, content).expect("failed to write file");
    }

    let backend = Backend::new_test_with_workspace(dir.path().to_path_buf(), Settings::default());
    (backend, dir)
}
