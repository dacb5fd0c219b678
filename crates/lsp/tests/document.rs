use glint_api::Language;
use glint_core::config::HighlightOptions;
use glint_lsp::highlight::document_highlights;
use glint_lsp::util::{detect_language, Document};
use glint_ruby::RubyParser;
use tower_lsp::lsp_types::{
    DocumentHighlight, DocumentHighlightKind, Position, Range, TextDocumentContentChangeEvent,
    Url,
};

fn parser() -> RubyParser {
    RubyParser::new().expect("Failed to load Ruby grammar")
}

fn ruby(content: &str) -> Document {
    Document::new(content.to_string(), Language::RUBY, 1, &parser())
}

fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
    Range::new(Position::new(sl, sc), Position::new(el, ec))
}

fn hl(range: Range, kind: DocumentHighlightKind) -> DocumentHighlight {
    DocumentHighlight {
        range,
        kind: Some(kind),
    }
}

#[test]
fn constant_highlights_map_to_lsp_ranges() {
    let doc = ruby("FOO = 1\ndef foo\n  FOO\nend");

    let result = document_highlights(&doc, Position::new(2, 3), &HighlightOptions::default());

    assert_eq!(
        result,
        Some(vec![
            hl(range(0, 0, 0, 3), DocumentHighlightKind::WRITE),
            hl(range(2, 2, 2, 5), DocumentHighlightKind::READ),
        ])
    );
}

#[test]
fn no_target_yields_none() {
    let doc = ruby("FOO = 1\ndef foo\n  FOO\nend");

    let on_equals = document_highlights(&doc, Position::new(0, 4), &HighlightOptions::default());
    assert_eq!(on_equals, None);

    let past_end = document_highlights(&doc, Position::new(40, 0), &HighlightOptions::default());
    assert_eq!(past_end, None);
}

#[test]
fn columns_are_utf16_code_units() {
    let doc = ruby("x = \"\u{1F600}\"; y = x");

    let result = document_highlights(&doc, Position::new(0, 14), &HighlightOptions::default());

    assert_eq!(
        result,
        Some(vec![
            hl(range(0, 0, 0, 1), DocumentHighlightKind::WRITE),
            hl(range(0, 14, 0, 15), DocumentHighlightKind::READ),
        ])
    );
}

#[test]
fn incremental_changes_apply_in_order() {
    let parser = parser();
    let doc = Document::new("x = 1\nputs x".to_string(), Language::RUBY, 1, &parser);

    let changes = vec![
        TextDocumentContentChangeEvent {
            range: Some(range(0, 0, 0, 1)),
            range_length: None,
            text: "total".to_string(),
        },
        TextDocumentContentChangeEvent {
            range: Some(range(1, 5, 1, 6)),
            range_length: None,
            text: "total".to_string(),
        },
    ];
    let updated = doc.apply_changes(&changes, 2, &parser);

    assert_eq!(updated.content(), "total = 1\nputs total");
    assert_eq!(updated.version, 2);

    let result = document_highlights(&updated, Position::new(1, 7), &HighlightOptions::default());
    assert_eq!(
        result,
        Some(vec![
            hl(range(0, 0, 0, 5), DocumentHighlightKind::WRITE),
            hl(range(1, 5, 1, 10), DocumentHighlightKind::READ),
        ])
    );
}

#[test]
fn older_versions_are_stale() {
    let parser = parser();
    let doc = Document::new("x = 1".to_string(), Language::RUBY, 4, &parser);

    assert!(doc.is_stale(3));
    assert!(!doc.is_stale(4));
    assert!(!doc.is_stale(5));

    let changes = vec![TextDocumentContentChangeEvent {
        range: None,
        range_length: None,
        text: "y = 2".to_string(),
    }];
    let updated = doc.apply_changes(&changes, 5, &parser);
    assert!(updated.is_stale(4));
}

#[test]
fn full_change_replaces_content() {
    let parser = parser();
    let doc = Document::new("a = 1".to_string(), Language::RUBY, 1, &parser);

    let changes = vec![TextDocumentContentChangeEvent {
        range: None,
        range_length: None,
        text: "@b = 2\n@b".to_string(),
    }];
    let updated = doc.apply_changes(&changes, 5, &parser);

    assert_eq!(updated.content(), "@b = 2\n@b");
    let result = document_highlights(&updated, Position::new(1, 1), &HighlightOptions::default());
    assert_eq!(result.map(|h| h.len()), Some(2));
}

#[test]
fn word_end_fallback_comes_from_options() {
    let doc = ruby("total = 1\nputs total");
    let after = Position::new(1, 10);

    assert_eq!(
        document_highlights(&doc, after, &HighlightOptions::default()),
        None
    );

    let options: HighlightOptions =
        serde_json::from_value(serde_json::json!({ "wordEndFallback": true })).unwrap();
    assert_eq!(
        document_highlights(&doc, after, &options).map(|h| h.len()),
        Some(2)
    );
}

#[test]
fn non_ruby_documents_have_no_tree() {
    let uri = Url::parse("file:///tmp/notes.txt").unwrap();
    let language = detect_language(&uri, "plaintext");
    assert_eq!(language, Language::UNKNOWN);

    let doc = Document::new("x = 1\nx".to_string(), language, 1, &parser());
    assert!(doc.tree.is_none());
    assert_eq!(
        document_highlights(&doc, Position::new(1, 0), &HighlightOptions::default()),
        None
    );
}

#[test]
fn language_falls_back_to_the_path() {
    let rakefile = Url::parse("file:///project/Rakefile").unwrap();
    assert_eq!(detect_language(&rakefile, ""), Language::RUBY);

    let script = Url::parse("file:///project/bin/setup.rb").unwrap();
    assert_eq!(detect_language(&script, "plaintext"), Language::RUBY);
    assert_eq!(detect_language(&script, "ruby"), Language::RUBY);
}
