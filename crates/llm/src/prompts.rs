//! Prompt templates for book summaries

/// System instruction sent with every summary request
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes books.";

/// User prompt for one book
pub fn book_prompt(book_name: &str, author: &str) -> String {
    format!("Summarize the book \"{}\" by {}.", book_name, author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_prompt() {
        assert_eq!(
            book_prompt("Dune", "Frank Herbert"),
            "Summarize the book \"Dune\" by Frank Herbert."
        );
    }
}
