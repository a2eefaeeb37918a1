//! Tests for the segmentation result type

#[cfg(test)]
mod tests {
    use periodic_writer::catalog::ElementRecord;
    use periodic_writer::segmentation::Segmentation;

    // Tests display lists the word and symbols with catalog casing
    // Verified by formatting keys instead of symbols
    #[test]
    fn test_display() {
        let neon = ElementRecord::new("10", "Neon", "Ne", "20.180");
        let oxygen = ElementRecord::new("8", "Oxygen", "O", "15.999");
        let nitrogen = ElementRecord::new("7", "Nitrogen", "N", "14.007");
        let segmentation =
            Segmentation::new("neon".to_string(), vec![&neon, &oxygen, &nitrogen]);

        assert_eq!(segmentation.to_string(), "neon: [Ne, O, N]");
    }

    #[test]
    fn test_accessors() {
        let iron = ElementRecord::new("26", "Iron", "Fe", "55.845");
        let segmentation = Segmentation::new("fe".to_string(), vec![&iron]);

        assert_eq!(segmentation.word(), "fe");
        assert_eq!(segmentation.len(), 1);
        assert!(!segmentation.is_empty());
        assert_eq!(segmentation.symbols(), vec!["Fe"]);
        assert_eq!(segmentation.spelled(), "fe");
        assert_eq!(
            segmentation.elements().first().map(|e| e.name()),
            Some("Iron")
        );
    }

    #[test]
    fn test_empty() {
        let segmentation = Segmentation::new(String::new(), Vec::new());

        assert!(segmentation.is_empty());
        assert_eq!(segmentation.to_string(), ": []");
    }
}
