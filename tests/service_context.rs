mod common;

use common::{caret, parse};
use symtags_lsp::find_service_in_context;
use symtags_lsp::node::key_text;

// ─── Cursor-to-Service Context Resolution Tests ─────────────────────────────

#[test]
fn test_find_service_in_context_inside_tag_name() {
    let (text, offset) = caret(concat!(
        "services:\n",
        "  foo:\n",
        "    tags:\n",
        "      - { name: fo<caret>o}\n",
    ));
    let doc = parse(&text);

    let node = doc.node_at_offset(offset).expect("offset should resolve to a node");
    let service = find_service_in_context(doc.source(), node)
        .expect("cursor inside a tag block should resolve to the service");

    assert_eq!(key_text(doc.source(), service), Some("foo"));
}

#[test]
fn test_find_service_in_context_inside_class_value() {
    let (text, offset) = caret(concat!(
        "services:\n",
        "  foo:\n",
        "    class: fo<caret>o",
    ));
    let doc = parse(&text);

    let node = doc.node_at_offset(offset).expect("offset should resolve to a node");
    let service = find_service_in_context(doc.source(), node)
        .expect("cursor inside a sibling key should resolve to the service");

    assert_eq!(key_text(doc.source(), service), Some("foo"));
}

#[test]
fn test_find_service_in_context_picks_the_right_service() {
    let (text, offset) = caret(concat!(
        "services:\n",
        "  foo:\n",
        "    class: Foo\n",
        "  bar:\n",
        "    tags:\n",
        "      - { name: routing.l<caret>oader }\n",
    ));
    let doc = parse(&text);

    let node = doc.node_at_offset(offset).expect("offset should resolve to a node");
    let service = find_service_in_context(doc.source(), node)
        .expect("cursor should resolve to a service");

    assert_eq!(key_text(doc.source(), service), Some("bar"));
}

#[test]
fn test_find_service_in_context_under_environment_scope() {
    let (text, offset) = caret(concat!(
        "when@dev:\n",
        "  services:\n",
        "    foo:\n",
        "      tags:\n",
        "        - { name: fo<caret>o }\n",
    ));
    let doc = parse(&text);

    let node = doc.node_at_offset(offset).expect("offset should resolve to a node");
    let service = find_service_in_context(doc.source(), node)
        .expect("nested services roots should qualify");

    assert_eq!(key_text(doc.source(), service), Some("foo"));
}

#[test]
fn test_find_service_in_context_outside_services_is_none() {
    let (text, offset) = caret(concat!(
        "parameters:\n",
        "  locale: e<caret>n\n",
    ));
    let doc = parse(&text);

    let node = doc.node_at_offset(offset).expect("offset should resolve to a node");
    assert!(
        find_service_in_context(doc.source(), node).is_none(),
        "keys outside a services root must not resolve"
    );
}

#[test]
fn test_service_at_offset_convenience() {
    let (text, offset) = caret(concat!(
        "services:\n",
        "  app.mailer:\n",
        "    class: App\\Mail<caret>er\n",
    ));
    let doc = parse(&text);

    let service = doc
        .service_at_offset(offset)
        .expect("document should resolve the enclosing service");
    assert_eq!(key_text(doc.source(), service), Some("app.mailer"));
}
