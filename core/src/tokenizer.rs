/// Split text on ASCII spaces. Runs of spaces and leading/trailing spaces yield no empty tokens;
/// tabs, newlines and other whitespace stay inside tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("a cat lives in the city");
        assert_eq!(t, vec!["a", "cat", "lives", "in", "the", "city"]);
    }

    #[test]
    fn only_spaces_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
    }
}
