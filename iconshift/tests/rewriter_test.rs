//! Tests for the byte-range rewriter that applies every rule match.

use iconshift::rewrite::{ByteRangeRewriter, Edit, RewriteError};

#[test]
fn test_simple_replacement() {
    let source = "Icon(Icons.close)";
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(5, 16, "LucideIcons.x"));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "Icon(LucideIcons.x)");
}

#[test]
fn test_multiple_non_overlapping_edits() {
    let source = "aaa bbb ccc";
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(8, 11, "CCC"));
    rewriter.add_edit(Edit::new(0, 3, "AAA"));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "AAA bbb CCC");
}

#[test]
fn test_overlapping_edits_error() {
    let source = "hello world";
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(0, 8, "hi"));
    rewriter.add_edit(Edit::new(5, 10, "there"));

    let result = rewriter.apply();
    assert!(matches!(result, Err(RewriteError::OverlappingEdits { .. })));
}

#[test]
fn test_out_of_bounds_error() {
    let source = "short";
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(0, 100, "long"));

    let result = rewriter.apply();
    assert!(matches!(result, Err(RewriteError::OutOfBounds { .. })));
}

#[test]
fn test_deletion_of_property() {
    let source = "BoxDecoration(color: c, boxShadow: [s])";
    let start = source.find(", boxShadow").unwrap();
    let end = source.rfind(')').unwrap();
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::delete(start, end));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "BoxDecoration(color: c)");
}

#[test]
fn test_insertion_after_import() {
    let source = "import 'a.dart';\nvoid main() {}\n";
    let pos = source.find('\n').unwrap();
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::insert(
        pos,
        "\nimport 'package:lucide_icons/lucide_icons.dart';",
    ));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(
        result,
        "import 'a.dart';\nimport 'package:lucide_icons/lucide_icons.dart';\nvoid main() {}\n"
    );
}

#[test]
fn test_preserves_surrounding_text() {
    let source = "// keep me\nIcon(Icons.home, size: 24)\n";
    let pos = source.find("Icons.home").unwrap();
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(pos, pos + "Icons.home".len(), "LucideIcons.home"));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "// keep me\nIcon(LucideIcons.home, size: 24)\n");
}

#[test]
fn test_empty_edits() {
    let source = "hello world";
    let rewriter = ByteRangeRewriter::new(source);
    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, source);
}

#[test]
fn test_adjacent_non_overlapping_edits() {
    let source = "abcdef";
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(0, 3, "XXX"));
    rewriter.add_edit(Edit::new(3, 6, "YYY"));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "XXXYYY");
}

#[test]
fn test_multibyte_text_is_preserved() {
    let source = "Text('Ünïcödé') Icon(Icons.close)";
    let pos = source.find("Icons.close").unwrap();
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edit(Edit::new(pos, pos + "Icons.close".len(), "LucideIcons.x"));

    let result = rewriter.apply().expect("should apply");
    assert_eq!(result, "Text('Ünïcödé') Icon(LucideIcons.x)");
}
