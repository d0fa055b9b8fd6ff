//! Fixture-driven extraction tests.
//!
//! Every `tests/fixtures/*.yaml` file is parsed and run through
//! service-record extraction; the result must match the sibling
//! `*.expected.json` file.

use std::path::Path;

use symtags_lsp::YamlDocument;
use symtags_lsp::services::service_records;

fn run_fixture(path: &Path) -> datatest_stable::Result<()> {
    let text = std::fs::read_to_string(path)?;
    let doc = YamlDocument::parse(text).ok_or("failed to parse fixture")?;
    let records = service_records(&doc, "file:///fixture.yaml");

    let expected_path = path.with_extension("expected.json");
    let expected: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&expected_path)?)?;
    let actual = serde_json::to_value(&records)?;

    assert_eq!(
        actual,
        expected,
        "extraction mismatch for {}",
        path.display()
    );
    Ok(())
}

datatest_stable::harness! {
    { test = run_fixture, root = "tests/fixtures", pattern = r".*\.yaml$" },
}
