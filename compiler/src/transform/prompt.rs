//! Free text → canonical audio prompt reference.

/// Played when a decision receives an invalid digit or no input.
pub const INVALID_ENTRY_PROMPT: &str = "callflow:1009";
pub const GOODBYE_PROMPT: &str = "callflow:1029";
/// Prefix of the synthesized "speak this text" reference.
pub const TTS_PREFIX: &str = "tts:";

/// Known phrase → prompt reference, in lookup order.
pub const BUILTIN_PROMPTS: &[(&str, &str)] = &[
    ("Invalid entry. Please try again", INVALID_ENTRY_PROMPT),
    ("Goodbye message", GOODBYE_PROMPT),
    ("Please enter your PIN", "callflow:1008"),
    ("An accepted response has been recorded", "callflow:1167"),
    ("Your response is being recorded as a decline", "callflow:1021"),
    ("Please contact your local control center", "callflow:1705"),
    ("To speak to a dispatcher", "callflow:1645"),
    ("We were not able to complete the transfer", "callflow:1353"),
];

#[derive(Debug, Clone, Copy)]
pub struct PromptResolver<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl PromptResolver<'static> {
    pub fn builtin() -> Self {
        PromptResolver {
            entries: BUILTIN_PROMPTS,
        }
    }
}

impl<'a> PromptResolver<'a> {
    pub fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        PromptResolver { entries }
    }

    /// Exact phrase first, then the first phrase contained in `text`
    /// (case-insensitive). Whitespace and punctuation are not normalized.
    pub fn lookup(&self, text: &str) -> Option<&'a str> {
        if let Some((_, prompt)) = self.entries.iter().find(|(phrase, _)| *phrase == text) {
            return Some(*prompt);
        }
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|(phrase, _)| lowered.contains(&phrase.to_lowercase()))
            .map(|(_, prompt)| *prompt)
    }

    /// Like `lookup`, falling back to a text-to-speech reference.
    pub fn resolve(&self, text: &str) -> String {
        match self.lookup(text) {
            Some(prompt) => prompt.to_string(),
            None => format!("{TTS_PREFIX}{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        let prompts = PromptResolver::builtin();
        assert_eq!(prompts.lookup("Goodbye message"), Some(GOODBYE_PROMPT));
    }

    #[test]
    fn substring_match_ignores_case() {
        let prompts = PromptResolver::builtin();
        assert_eq!(
            prompts.lookup("Sorry. INVALID ENTRY. PLEASE TRY AGAIN now"),
            Some(INVALID_ENTRY_PROMPT)
        );
    }

    #[test]
    fn exact_match_wins_over_earlier_substring() {
        let table = [("bye", "p:1"), ("Goodbye", "p:2")];
        let prompts = PromptResolver::new(&table);
        assert_eq!(prompts.lookup("Goodbye"), Some("p:2"));
        assert_eq!(prompts.lookup("Goodbye now"), Some("p:1"));
    }

    #[test]
    fn near_miss_falls_back_to_tts() {
        let prompts = PromptResolver::builtin();
        assert_eq!(prompts.lookup("Good-bye message"), None);
        assert_eq!(
            prompts.resolve("Are you available?\\nPress 1"),
            "tts:Are you available?\\nPress 1"
        );
    }
}
