//! Filename candidate construction from catalog metadata.

use crate::catalog::Volume;

/// Wrap `text` in square brackets when it contains a comma, otherwise return
/// it unchanged.
///
/// Not idempotent for comma-bearing input: `tag("a,b")` is `"[a,b]"` and
/// `tag("[a,b]")` is `"[[a,b]]"`. The candidate format relies on this to
/// bracket once at each nesting level, so a joined author list gains one pair
/// of brackets on top of any the individual names earned.
pub fn tag(text: &str) -> String {
    if text.contains(',') {
        format!("[{text}]")
    } else {
        text.to_string()
    }
}

/// Format every usable record into a filename candidate, preserving record
/// order. Records missing any of title, authors or publisher are skipped
/// without error; an empty result is the caller's signal that nothing usable
/// came back.
pub fn build_candidates(volumes: &[Volume], isbn: &str) -> Vec<String> {
    volumes
        .iter()
        .filter_map(|volume| candidate(volume, isbn))
        .collect()
}

/// `"<authors>, <title> [<publisher>, <isbn>]"` — each author tagged
/// individually, the joined list tagged again (a multi-author list always
/// contains a comma, so it comes out bracketed), and the publisher/isbn pair
/// tagged as a unit.
fn candidate(volume: &Volume, isbn: &str) -> Option<String> {
    let info = volume.volume_info.as_ref()?;
    let title = info.title.as_deref()?;
    let authors = info.authors.as_ref()?;
    let publisher = info.publisher.as_deref()?;

    let title = tag(title);
    let authors = tag(&authors.iter().map(|a| tag(a)).collect::<Vec<_>>().join(", "));
    let suffix = tag(&format!("{}, {isbn}", tag(publisher)));

    Some(format!("{authors}, {title} {suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VolumeInfo;

    fn volume(
        title: Option<&str>,
        authors: Option<&[&str]>,
        publisher: Option<&str>,
    ) -> Volume {
        Volume {
            volume_info: Some(VolumeInfo {
                title: title.map(str::to_string),
                authors: authors.map(|a| a.iter().map(|s| s.to_string()).collect()),
                publisher: publisher.map(str::to_string),
            }),
        }
    }

    #[test]
    fn tag_leaves_comma_free_text_alone() {
        assert_eq!(tag("Dune"), "Dune");
        assert_eq!(tag(""), "");
    }

    #[test]
    fn tag_brackets_text_with_a_comma() {
        assert_eq!(tag("a,b"), "[a,b]");
    }

    #[test]
    fn tag_is_not_idempotent_on_comma_bearing_input() {
        assert_eq!(tag(&tag("a,b")), "[[a,b]]");
    }

    #[test]
    fn single_author_candidate_is_unbracketed() {
        let volumes = [volume(
            Some("Dune"),
            Some(&["Frank Herbert"]),
            Some("Ace Books"),
        )];

        assert_eq!(
            build_candidates(&volumes, "9780441013593"),
            vec!["Frank Herbert, Dune [Ace Books, 9780441013593]".to_string()]
        );
    }

    #[test]
    fn multi_author_list_is_bracketed() {
        let volumes = [volume(
            Some("Good Omens"),
            Some(&["Terry Pratchett", "Neil Gaiman"]),
            Some("Gollancz"),
        )];

        assert_eq!(
            build_candidates(&volumes, "9780575048003"),
            vec!["[Terry Pratchett, Neil Gaiman], Good Omens [Gollancz, 9780575048003]".to_string()]
        );
    }

    #[test]
    fn comma_in_title_is_bracketed() {
        let volumes = [volume(
            Some("The Lion, the Witch and the Wardrobe"),
            Some(&["C. S. Lewis"]),
            Some("Geoffrey Bles"),
        )];

        assert_eq!(
            build_candidates(&volumes, "9780006716631"),
            vec![
                "C. S. Lewis, [The Lion, the Witch and the Wardrobe] [Geoffrey Bles, 9780006716631]"
                    .to_string()
            ]
        );
    }

    #[test]
    fn incomplete_records_are_skipped() {
        let volumes = [
            volume(None, Some(&["A"]), Some("P")),
            volume(Some("T"), None, Some("P")),
            volume(Some("T"), Some(&["A"]), None),
            Volume { volume_info: None },
        ];

        assert!(build_candidates(&volumes, "123").is_empty());
    }

    #[test]
    fn record_order_is_preserved() {
        let volumes = [
            volume(Some("First"), Some(&["A"]), Some("P")),
            volume(None, None, None),
            volume(Some("Second"), Some(&["B"]), Some("Q")),
        ];

        assert_eq!(
            build_candidates(&volumes, "42"),
            vec!["A, First [P, 42]".to_string(), "B, Second [Q, 42]".to_string()]
        );
    }
}
