//! Table-driven rewriting of casual English into a more formal register

use regex::{Captures, Regex, RegexBuilder};
use std::sync::LazyLock;

/// A literal pattern and the text that replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormalizationRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> FormalizationRule {
    FormalizationRule {
        pattern,
        replacement,
    }
}

/// Built-in rules. Order is observable: each rule runs over the output of the previous ones.
pub const FORMALIZATION_RULES: &[FormalizationRule] = &[
    rule("don't", "do not"),
    rule("can't", "cannot"),
    rule("won't", "will not"),
    rule("shouldn't", "should not"),
    rule("wouldn't", "would not"),
    rule("couldn't", "could not"),
    rule("isn't", "is not"),
    rule("aren't", "are not"),
    rule("wasn't", "was not"),
    rule("weren't", "were not"),
    rule("hasn't", "has not"),
    rule("haven't", "have not"),
    rule("hadn't", "had not"),
    rule("doesn't", "does not"),
    rule("didn't", "did not"),
    rule(" ok ", " acceptable "),
    rule(" OK ", " acceptable "),
    rule(" gonna ", " going to "),
    rule(" wanna ", " want to "),
    rule(" gotta ", " have to "),
    rule(" yeah ", " yes "),
    rule(" yep ", " yes "),
    rule(" nope ", " no "),
    rule(" stuff ", " items "),
    rule(" things ", " matters "),
    rule(" get ", " obtain "),
    rule(" got ", " obtained "),
    rule(" kids ", " children "),
    rule(" guys ", " individuals "),
    rule(" hi ", " hello "),
    rule(" hey ", " hello "),
    rule(" bye ", " goodbye "),
];

// Sentence starts only count ASCII word characters.
static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]|[.!?]\s+[A-Za-z0-9_]").expect("sentence pattern is valid")
});

static DEFAULT_FORMALIZER: LazyLock<Formalizer> = LazyLock::new(|| {
    Formalizer::new(FORMALIZATION_RULES).expect("built-in rules are escaped literals")
});

#[derive(Debug)]
struct CompiledRule {
    matcher: Regex,
    replacement: &'static str,
}

/// Ordered set of compiled rules
#[derive(Debug)]
pub struct Formalizer {
    rules: Vec<CompiledRule>,
}

impl Formalizer {
    /// Compile a rule table; patterns are matched literally and ASCII case-insensitively.
    /// A pattern with non-ASCII letters is rejected.
    pub fn new(rules: &[FormalizationRule]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|r| -> Result<CompiledRule, regex::Error> {
                let matcher = RegexBuilder::new(&regex::escape(r.pattern))
                    .case_insensitive(true)
                    .unicode(false)
                    .build()?;
                Ok(CompiledRule {
                    matcher,
                    replacement: r.replacement,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// The process-wide formalizer built from [`FORMALIZATION_RULES`]
    pub fn global() -> &'static Formalizer {
        &DEFAULT_FORMALIZER
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in table order, then capitalize sentence starts
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();

        for rule in &self.rules {
            current = rule
                .matcher
                .replace_all(&current, |caps: &Captures| {
                    preserve_leading_case(&caps[0], rule.replacement)
                })
                .into_owned();
        }

        capitalize_sentences(&current)
    }
}

/// Formalize text with the built-in rule table
pub fn formalize(text: &str) -> String {
    Formalizer::global().apply(text)
}

fn preserve_leading_case(matched: &str, replacement: &str) -> String {
    match matched.chars().next() {
        Some(first) if first.is_uppercase() => uppercase_first(replacement),
        _ => replacement.to_string(),
    }
}

fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_sentences(text: &str) -> String {
    SENTENCE_START
        .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}
