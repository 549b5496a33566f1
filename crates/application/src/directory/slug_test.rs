#[cfg(test)]
mod tests {
    use crate::directory::slugify;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Cafe X"), "cafe-x");
        assert_eq!(slugify("  My   Shop  "), "my-shop");
        assert_eq!(slugify("Already-Hyphenated Name"), "already-hyphenated-name");
    }

    #[test]
    fn test_slugify_preserves_persian() {
        assert_eq!(slugify("کافه میزبان"), "کافه-میزبان");
        assert_eq!(slugify("رستوران سنتی شیراز"), "رستوران-سنتی-شیراز");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Joe's Diner!"), "joes-diner");
        assert_eq!(slugify("A & B"), "a-b");
    }

    #[test]
    fn test_slugify_empty_for_symbol_only_names() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("@#$%"), "");
    }

    #[test]
    fn test_slugify_trims_edge_separators() {
        assert_eq!(slugify("-edge case-"), "edge-case");
        assert_eq!(slugify("__private__"), "private");
    }

    #[test]
    fn test_slugify_mixed_script() {
        assert_eq!(slugify("Cafe کافه 12"), "cafe-کافه-12");
    }
}
