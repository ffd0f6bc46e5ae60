/// Collapses runs of whitespace into single spaces and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  € 1.299,00 \n\t*  "), "€ 1.299,00 *");
        assert_eq!(collapse_whitespace("\n  \t"), "");
        assert_eq!(collapse_whitespace("AH-10"), "AH-10");
    }
}
