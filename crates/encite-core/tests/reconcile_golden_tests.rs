//! Golden tests for chunking and citation reconciliation.
//!
//! Each case chunks a document, reconciles a canned model response against
//! the chunks, and checks the entities and the text their spans cover.

use encite_core::models::{Citation, ContentBlock, Entity};
use encite_core::{chunk_text, reconcile, ReconcileError};

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    document: &'static str,
    /// (block text, cited chunk range)
    blocks: Vec<(&'static str, Option<(usize, usize)>)>,
    /// (type, name, cited text)
    expected: Vec<(&'static str, &'static str, &'static str)>,
}

fn tagged(entity_type: &str, name: &str) -> String {
    format!("<entity_type>{}</entity_type><name>{}</name>", entity_type, name)
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "single-company",
            document: "Microsoft is a technology company.",
            blocks: vec![("<entity_type>company</entity_type><name>Microsoft</name>", Some((0, 1)))],
            expected: vec![("company", "Microsoft", "Microsoft")],
        },
        GoldenCase {
            id: "person-and-company",
            document: "John Smith works at Apple Inc.",
            blocks: vec![
                ("<entity_type>person</entity_type><name>John Smith</name>", Some((0, 2))),
                ("<entity_type>company</entity_type><name>Apple Inc</name>", Some((4, 6))),
            ],
            expected: vec![
                ("person", "John Smith", "John Smith"),
                ("company", "Apple Inc", "Apple Inc"),
            ],
        },
        GoldenCase {
            id: "span-crosses-collapsed-separators",
            document: "Visit   New,  York\tsoon",
            blocks: vec![("<entity_type>city</entity_type><name>New York</name>", Some((1, 3)))],
            expected: vec![("city", "New York", "New,  York")],
        },
        GoldenCase {
            id: "prose-between-entities",
            document: "Ada Lovelace met Charles Babbage in London.",
            blocks: vec![
                ("I found the following entities.", None),
                ("<entity_type>person</entity_type><name>Ada Lovelace</name>", Some((0, 2))),
                ("\n", None),
                ("<entity_type>person</entity_type>\n<name>Charles\nBabbage</name>", Some((3, 5))),
                ("<entity_type>location</entity_type><name>London</name>", Some((6, 7))),
            ],
            expected: vec![
                ("person", "Ada Lovelace", "Ada Lovelace"),
                ("person", "Charles\nBabbage", "Charles Babbage"),
                ("location", "London", "London"),
            ],
        },
        GoldenCase {
            id: "non-ascii-offsets",
            document: "Zoë moved to Łódź, Poland.",
            blocks: vec![
                ("<entity_type>person</entity_type><name>Zoë</name>", Some((0, 1))),
                ("<entity_type>city</entity_type><name>Łódź</name>", Some((3, 4))),
            ],
            expected: vec![("person", "Zoë", "Zoë"), ("city", "Łódź", "Łódź")],
        },
    ]
}

fn build_blocks(case: &GoldenCase) -> Vec<ContentBlock> {
    case.blocks
        .iter()
        .map(|(text, range)| match range {
            Some((start, end)) => ContentBlock::text(*text, vec![Citation::new(*start, *end)]),
            None => ContentBlock::uncited(*text),
        })
        .collect()
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let chunks = chunk_text(case.document);
        let entities = reconcile(&build_blocks(&case), &chunks)
            .unwrap_or_else(|e| panic!("Case {} failed: {}", case.id, e));

        assert_eq!(entities.len(), case.expected.len(), "Case {}: entity count", case.id);

        for (entity, (entity_type, name, cited)) in entities.iter().zip(&case.expected) {
            assert_eq!(entity.entity_type, *entity_type, "Case {}: type", case.id);
            assert_eq!(entity.name, *name, "Case {}: name", case.id);
            assert_eq!(
                entity.extract(case.document),
                Some(*cited),
                "Case {}: cited text",
                case.id
            );
        }
    }
}

#[test]
fn test_end_to_end_offsets() {
    let document = "Microsoft is a technology company.";
    let chunks = chunk_text(document);
    let blocks = vec![ContentBlock::text(tagged("company", "Microsoft"), vec![Citation::new(0, 1)])];

    let entities = reconcile(&blocks, &chunks).unwrap();
    assert_eq!(entities, vec![Entity::new("company", "Microsoft", 0, 9)]);
}

#[test]
fn test_citation_past_last_chunk() {
    let chunks = chunk_text("Hello World");
    let blocks = vec![ContentBlock::text(tagged("greeting", "Hello"), vec![Citation::new(1, 3)])];

    let err = reconcile(&blocks, &chunks).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::CitationOutOfRange {
            block_index: 0,
            chunk_index: 2,
            chunk_count: 2,
        }
    );
}

#[test]
fn test_citation_against_empty_document() {
    let chunks = chunk_text("");
    let blocks = vec![ContentBlock::text(tagged("company", "Ghost"), vec![Citation::new(0, 1)])];

    assert!(matches!(
        reconcile(&blocks, &chunks),
        Err(ReconcileError::CitationOutOfRange { chunk_index: 0, chunk_count: 0, .. })
    ));
}
