use tracing::debug;

use newsmood_common::TagVocabulary;

/// Keep the candidates that name a vocabulary entry, in their original order.
///
/// Unknown names are dropped silently. The result is never re-capped or
/// re-filled: the requested schema already limits secondary tags.
pub fn filter_secondary_tags(candidates: &[String], vocabulary: &TagVocabulary) -> Vec<String> {
    candidates
        .iter()
        .filter(|tag| {
            let known = vocabulary.contains(tag);
            if !known {
                debug!(tag = %tag, catalog = %vocabulary.catalog(), "Dropping unknown secondary tag");
            }
            known
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmood_common::TagCatalog;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn drops_unknown_tags_and_keeps_order() {
        let vocab = TagVocabulary::new(TagCatalog::Category);
        let filtered = filter_secondary_tags(
            &tags(&["Taxation Policy", "Esports Betting Odds", "Housing Crisis"]),
            &vocab,
        );
        assert_eq!(filtered, tags(&["Taxation Policy", "Housing Crisis"]));
    }

    #[test]
    fn three_valid_tags_pass_through_unchanged() {
        let vocab = TagVocabulary::new(TagCatalog::Category);
        let input = tags(&["Taxation Policy", "Housing Crisis", "Cost of Living"]);
        assert_eq!(filter_secondary_tags(&input, &vocab), input);
    }

    #[test]
    fn filtering_is_idempotent() {
        let vocab = TagVocabulary::new(TagCatalog::EmotionalImpact);
        let once = filter_secondary_tags(&tags(&["Anxiety / Fear", "Joy!!", "Anger"]), &vocab);
        assert_eq!(filter_secondary_tags(&once, &vocab), once);
        assert!(once.iter().all(|t| vocab.contains(t)));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let vocab = TagVocabulary::new(TagCatalog::Category);
        assert!(filter_secondary_tags(&[], &vocab).is_empty());
    }

    #[test]
    fn tags_are_matched_against_the_right_catalog() {
        let emotional = TagVocabulary::new(TagCatalog::EmotionalImpact);
        assert!(filter_secondary_tags(&tags(&["Taxation Policy"]), &emotional).is_empty());
    }
}
