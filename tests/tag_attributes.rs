mod common;

use common::parse;
use symtags_lsp::ServiceTag;
use symtags_lsp::node::first_document;

// ─── ServiceTag Attribute Extraction Tests ──────────────────────────────────

#[test]
fn test_tag_attribute_extraction() {
    let doc = parse("{ name: routing.loader, method: foo }");
    let hash = first_document(doc.root()).expect("fixture should have a document");

    let tag = ServiceTag::new("foo", hash, doc.source());

    assert_eq!(tag.attribute("method"), Some("foo"));
    assert_eq!(tag.attribute("name"), Some("routing.loader"));
}

#[test]
fn test_tag_name_is_the_constructor_value() {
    // The record's name is whatever it was constructed with (the tag's
    // own `name` attribute during traversal), independent of the block
    // contents.
    let doc = parse("{ name: routing.loader, method: foo }");
    let hash = first_document(doc.root()).expect("fixture should have a document");

    let tag = ServiceTag::new("foo", hash, doc.source());
    assert_eq!(tag.name(), "foo");
}

#[test]
fn test_tag_attribute_quoting_invariance() {
    let variants = [
        "{ name: kernel.event_listener, event: eventName, method: methodName }",
        "{ name: 'kernel.event_listener', event: 'eventName', method: 'methodName' }",
        "{ name: \"kernel.event_listener\", event: \"eventName\", method: \"methodName\" }",
    ];

    for variant in variants {
        let doc = parse(variant);
        let hash = first_document(doc.root()).expect("fixture should have a document");
        let tag = ServiceTag::new("kernel.event_listener", hash, doc.source());

        assert_eq!(tag.attribute("name"), Some("kernel.event_listener"), "in {}", variant);
        assert_eq!(tag.attribute("event"), Some("eventName"), "in {}", variant);
        assert_eq!(tag.attribute("method"), Some("methodName"), "in {}", variant);
    }
}

#[test]
fn test_tag_attribute_absent_key() {
    let doc = parse("{ name: routing.loader }");
    let hash = first_document(doc.root()).expect("fixture should have a document");

    let tag = ServiceTag::new("routing.loader", hash, doc.source());
    assert_eq!(tag.attribute("method"), None);
}

#[test]
fn test_tag_attribute_on_block_style_mapping() {
    let doc = parse("name: monolog.logger\nchannel: doctrine\n");
    let content = first_document(doc.root()).expect("fixture should have a document");

    let tag = ServiceTag::new("monolog.logger", content, doc.source());
    assert_eq!(tag.attribute("channel"), Some("doctrine"));
}
