use crate::chat::responder::{KeywordRule, ResponderTable};
use crate::error::TableError;

pub const GREETING: &str = "Hello! Welcome to SoftSell. How can I help you today?";

pub const FALLBACK: &str = "I don't have information on that specific topic. For personalized assistance, please submit the contact form above or ask me about selling software licenses.";

pub const SELL_ANSWER: &str = "To sell your licenses, simply fill out our valuation form at the top of the page. We'll review your submission and get back to you within 24 hours with a competitive offer. The process is fast and secure!";

pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "How do I sell my licenses?",
    "What types of software do you accept?",
    "How much are my licenses worth?",
    "Is the process secure and legal?",
    "How long does the process take?",
    "How do I contact support?",
];

// Order matters: the first rule with any hit answers.
const RULES: [(&[&str], &str); 8] = [
    (&["how", "sell", "license"], SELL_ANSWER),
    (
        &["price", "worth", "value", "cost", "money", "pay", "payment"],
        "We offer up to 70% of the original license value, which is typically higher than our competitors. The exact amount depends on the software type, version, and remaining subscription time. Submit your details in our form and we'll provide a free valuation within 24 hours.",
    ),
    (
        &["process", "steps", "how", "work"],
        "Our process is simple: 1) Upload your license details through our secure form 2) Receive a competitive market valuation within 24 hours 3) Accept our offer and receive payment within 5 business days. The entire process typically takes 7 days or less.",
    ),
    (
        &["secure", "security", "safe", "legal"],
        "Security is our top priority. All license transfers are fully compliant with software vendors' terms. We use bank-level encryption for all data, and our legal team ensures every transaction is properly documented. We've completed thousands of transfers without issues.",
    ),
    (
        &["software", "license", "type", "accept"],
        "We accept almost all major software licenses including Microsoft (Office, Windows, Server), Adobe (Creative Cloud, Acrobat), Autodesk (AutoCAD, Revit), Oracle Database, VMware, and many others. If your software isn't listed, just ask and we'll let you know!",
    ),
    (
        &["time", "long", "fast", "quick", "duration"],
        "From submission to payment, our process typically takes just 5-7 business days. Valuation is provided within 24 hours, and once you accept, payment is processed within 5 business days.",
    ),
    (
        &["contact", "support", "help", "talk", "human"],
        "You can reach our support team by filling out the contact form on this page or by emailing support@softsell.com. Our business hours are Monday-Friday, 9am-5pm EST, and we typically respond to all inquiries within 4 business hours.",
    ),
    (
        &["company", "about", "who"],
        "SoftSell was founded in 2020 by former IT procurement specialists. We've helped over 1,000 businesses recover value from unused software licenses, processing more than $15 million in license transfers. Our team of 25 specialists has deep expertise in software licensing and compliance.",
    ),
];

/// The SoftSell FAQ table used by the chat widget.
pub fn softsell_table() -> Result<ResponderTable, TableError> {
    let rules = RULES
        .iter()
        .map(|(keywords, answer)| KeywordRule::new(keywords.iter(), *answer))
        .collect();
    ResponderTable::new(rules, GREETING, FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_of(index: usize) -> &'static str {
        RULES[index].1
    }

    #[test]
    fn default_table_builds_with_all_rules() {
        let table = softsell_table().unwrap();
        assert_eq!(table.rules().len(), RULES.len());
        assert_eq!(table.greeting(), GREETING);
        assert_eq!(table.fallback(), FALLBACK);
        for rule in table.rules() {
            assert!(!rule.keywords().is_empty());
            assert!(rule.keywords().iter().all(|k| *k == k.to_lowercase()));
        }
    }

    #[test]
    fn selling_question_gets_sell_answer() {
        let table = softsell_table().unwrap();
        assert_eq!(table.respond("How do I sell my licenses?"), SELL_ANSWER);
    }

    #[test]
    fn refund_question_falls_back() {
        let table = softsell_table().unwrap();
        assert_eq!(table.respond("What is your refund policy?"), FALLBACK);
    }

    #[test]
    fn price_is_case_insensitive() {
        let table = softsell_table().unwrap();
        assert_eq!(table.respond("PRICE?"), answer_of(1));
        assert_eq!(table.respond("price?"), answer_of(1));
    }

    #[test]
    fn suggested_questions_hit_table_order_quirks() {
        let table = softsell_table().unwrap();
        assert_eq!(table.respond(SUGGESTED_QUESTIONS[1]), answer_of(4));
        // "how" in rule 0 shadows the timing and contact rules
        assert_eq!(table.respond(SUGGESTED_QUESTIONS[4]), SELL_ANSWER);
        assert_eq!(table.respond(SUGGESTED_QUESTIONS[5]), SELL_ANSWER);
        // "process" beats "secure"
        assert_eq!(table.respond(SUGGESTED_QUESTIONS[3]), answer_of(2));
    }

    #[test]
    fn keyword_inside_longer_word_still_matches() {
        let table = softsell_table().unwrap();
        assert_eq!(table.respond("whoever runs this"), answer_of(7));
        assert_eq!(table.respond("nice workshop"), answer_of(2));
    }
}
