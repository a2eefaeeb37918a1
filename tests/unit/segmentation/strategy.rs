//! Tests for strategy dispatch and batch segmentation

#[cfg(test)]
mod tests {
    use periodic_writer::WriterError;
    use periodic_writer::catalog::Catalog;
    use periodic_writer::catalog::loader::load_catalog;
    use periodic_writer::io::words::WordList;
    use periodic_writer::segmentation::Strategy;
    use periodic_writer::segmentation::strategy::segment_words;
    use std::path::Path;

    fn bundled() -> Catalog {
        load_catalog(Path::new("periodic_table.csv")).unwrap()
    }

    #[test]
    fn test_default_is_greedy() {
        assert_eq!(Strategy::default(), Strategy::Greedy);
    }

    // Tests each strategy dispatches to its segmenter
    // Verified by routing both strategies to the greedy segmenter
    #[test]
    fn test_strategy_dispatch() {
        let catalog = bundled();

        assert!(Strategy::Greedy.segment(&catalog, "hero").is_err());
        assert!(Strategy::Exhaustive.segment(&catalog, "hero").is_ok());
    }

    // Tests words are segmented in list order
    #[test]
    fn test_segment_words_in_order() {
        let catalog = bundled();
        let words = WordList::parse("neon\niron\nbacon\n");

        let segmentations = segment_words(&catalog, &words, Strategy::Greedy).unwrap();
        let spelled: Vec<&str> = segmentations.iter().map(|s| s.word()).collect();

        assert_eq!(spelled, vec!["neon", "iron", "bacon"]);
    }

    // Tests the first failing word stops the batch
    // Verified by skipping failed words
    #[test]
    fn test_segment_words_stops_on_failure() {
        let catalog = bundled();
        let words = WordList::parse("neon\ncoffee\niron\n");

        let result = segment_words(&catalog, &words, Strategy::Greedy);
        match result {
            Err(WriterError::NoMatchingElement { word, .. }) => assert_eq!(word, "coffee"),
            other => unreachable!("Expected NoMatchingElement, got {other:?}"),
        }
    }
}
