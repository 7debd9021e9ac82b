use crate::error::TableError;

/// One entry of the FAQ table: if any keyword shows up in the user's text,
/// the answer is used.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    answer: String,
}

impl KeywordRule {
    /// Keywords are stored lowercased and otherwise verbatim, so surrounding
    /// spaces stay part of the needle. Empty keywords are dropped since an
    /// empty needle would match every input.
    pub fn new<I, K>(keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            keywords,
            answer: answer.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Plain substring containment, no tokenizing: "showcase" matches "how".
    fn matches(&self, lowered_input: &str) -> bool {
        self.keywords.iter().any(|k| lowered_input.contains(k.as_str()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResponderTable {
    rules: Vec<KeywordRule>,
    greeting: String,
    fallback: String,
}

impl ResponderTable {
    pub fn new(
        rules: Vec<KeywordRule>,
        greeting: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Result<Self, TableError> {
        if let Some(index) = rules.iter().position(|r| r.keywords().is_empty()) {
            return Err(TableError::EmptyRule { index });
        }
        Ok(Self {
            rules,
            greeting: greeting.into(),
            fallback: fallback.into(),
        })
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// First rule (in table order) with any matching keyword wins. Rules are
    /// not scored against each other.
    pub fn respond(&self, input: &str) -> &str {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(KeywordRule::answer)
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResponderTable {
        ResponderTable::new(
            vec![
                KeywordRule::new(["how", "sell"], "selling"),
                KeywordRule::new(["price", "pay"], "pricing"),
                KeywordRule::new(["process", "how"], "process"),
            ],
            "hi",
            "no idea",
        )
        .unwrap()
    }

    #[test]
    fn first_matching_rule_wins() {
        let t = table();
        // "how" and "process" both appear, rule order decides
        assert_eq!(t.respond("how does the process work"), "selling");
        assert_eq!(t.respond("what is the process"), "process");
    }

    #[test]
    fn more_keyword_hits_do_not_outrank_order() {
        let t = table();
        assert_eq!(t.respond("can I pay the price to sell"), "selling");
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        let t = table();
        assert_eq!(t.respond("refund policy?"), "no idea");
        assert_eq!(t.respond(""), "no idea");
    }

    #[test]
    fn matching_ignores_case() {
        let t = table();
        assert_eq!(t.respond("PRICE?"), t.respond("price?"));
        assert_eq!(t.respond("PRICE?"), "pricing");
    }

    #[test]
    fn substring_matches_inside_words() {
        let t = table();
        assert_eq!(t.respond("showcase"), "selling");
        assert_eq!(t.respond("prepayment"), "pricing");
        // "workflow" has no contiguous "how"
        assert_eq!(t.respond("workflow"), "no idea");
    }

    #[test]
    fn keywords_are_lowercased_but_not_trimmed() {
        let rule = KeywordRule::new(["Sell", "", "LICENSE "], "x");
        assert_eq!(rule.keywords(), ["sell", "license "]);
    }

    #[test]
    fn padded_keyword_only_matches_the_whole_word() {
        let t = ResponderTable::new(vec![KeywordRule::new([" how "], "how-word")], "hi", "fb").unwrap();
        assert_eq!(t.respond("showcase"), "fb");
        assert_eq!(t.respond("so how does it work"), "how-word");
    }

    #[test]
    fn rule_without_keywords_is_rejected() {
        let err = ResponderTable::new(
            vec![KeywordRule::new(["a"], "a"), KeywordRule::new([""], "b")],
            "hi",
            "fallback",
        )
        .unwrap_err();
        assert_eq!(err, TableError::EmptyRule { index: 1 });
    }
}
