//! Quality gate for prompt definitions.
//!
//! Publishing is gated on an ordered table of independent rules. Every rule
//! runs (there is no short-circuit) and each failure contributes one
//! diagnostic, so the author sees the complete picture in a single pass.
//!
//! The rules are deliberately heuristic (substring and count checks over
//! lowercased text) rather than semantic: the graded artifact is free-form
//! natural language with no grammar to parse, and a fixed vocabulary keeps
//! every failure explainable. Indicator lists carry both English and
//! Portuguese variants so prompts authored in either language validate the
//! same way.

use crate::types::{PromptDefinition, ValidationReport};

/// Minimum trimmed length of the system prompt, in characters.
const MIN_SYSTEM_PROMPT_CHARS: usize = 100;

/// Phrases that declare an explicit persona.
const ROLE_INDICATORS: &[&str] = &[
    "you are a",
    "you are an",
    "you act as",
    "your role is",
    "você é um",
    "você é uma",
    "você atua como",
    "seu papel é",
    "sua função é",
];

/// Markers of explicit output-format guidance. "## " and "**" catch
/// Markdown structure; the rest catch named formats.
const FORMAT_INDICATORS: &[&str] = &[
    "markdown",
    "user story",
    "format",
    "formato",
    "structure",
    "estrutura",
    "## ",
    "**",
];

/// Tokens that signal worked examples (few-shot prompting).
const EXAMPLE_INDICATORS: &[&str] = &["exemplo", "example", "input", "output"];

/// The example word itself, in both languages.
const EXAMPLE_WORDS: &[&str] = &["exemplo", "example"];

/// Minimum combined count of example-indicator tokens in the system prompt.
const MIN_EXAMPLE_INDICATORS: usize = 4;

/// Minimum count of the example word itself: at least two distinct worked
/// examples, not one passing mention.
const MIN_EXAMPLE_WORDS: usize = 2;

/// Placeholder markers that flag unfinished authoring.
const PENDING_MARKERS: &[&str] = &["[todo]", "todo:", "fixme", "xxx", "hack:", "temp:"];

/// Minimum number of documented techniques.
const MIN_TECHNIQUES: usize = 2;

/// Minimum trimmed length of each technique description, in characters.
const MIN_TECHNIQUE_CHARS: usize = 10;

/// One gate rule: a name and a pure check returning a diagnostic on failure.
struct Rule {
    name: &'static str,
    check: fn(&PromptDefinition) -> Option<String>,
}

/// The ordered rule table. Report diagnostics follow this order.
const RULES: &[Rule] = &[
    Rule {
        name: "non-empty instruction",
        check: check_system_prompt_length,
    },
    Rule {
        name: "role framing",
        check: check_role_definition,
    },
    Rule {
        name: "output-format guidance",
        check: check_format_guidance,
    },
    Rule {
        name: "worked examples",
        check: check_worked_examples,
    },
    Rule {
        name: "no pending markers",
        check: check_pending_markers,
    },
    Rule {
        name: "technique count",
        check: check_techniques,
    },
];

/// Run the full quality gate over a prompt definition.
///
/// Pure and deterministic: the same definition always yields the same
/// report. Malformed definitions never panic; absent fields behave as
/// empty and simply fail the relevant rule.
pub fn validate(definition: &PromptDefinition) -> ValidationReport {
    let errors: Vec<String> = RULES
        .iter()
        .filter_map(|rule| {
            let failure = (rule.check)(definition);
            if let Some(ref diagnostic) = failure {
                tracing::debug!(rule = rule.name, "rule failed: {}", diagnostic);
            }
            failure
        })
        .collect();

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn check_system_prompt_length(def: &PromptDefinition) -> Option<String> {
    let trimmed = def.system_prompt.trim();
    if trimmed.is_empty() {
        return Some("system prompt is empty or contains only whitespace".to_string());
    }

    let length = trimmed.chars().count();
    if length <= MIN_SYSTEM_PROMPT_CHARS {
        return Some(format!(
            "system prompt too short: {} characters, expected more than {}",
            length, MIN_SYSTEM_PROMPT_CHARS
        ));
    }

    None
}

fn check_role_definition(def: &PromptDefinition) -> Option<String> {
    let lower = def.system_prompt.to_lowercase();
    if ROLE_INDICATORS.iter().any(|p| lower.contains(p)) {
        return None;
    }

    Some(format!(
        "system prompt does not declare a persona; expected a phrase like \"{}\" or \"{}\"",
        ROLE_INDICATORS[0], ROLE_INDICATORS[4]
    ))
}

fn check_format_guidance(def: &PromptDefinition) -> Option<String> {
    let combined = format!("{} {}", def.system_prompt, def.user_prompt).to_lowercase();
    if FORMAT_INDICATORS.iter().any(|p| combined.contains(p)) {
        return None;
    }

    Some(
        "prompt does not specify an output format; mention a format by name \
         (e.g. \"markdown\", \"user story\") or use Markdown structure"
            .to_string(),
    )
}

fn check_worked_examples(def: &PromptDefinition) -> Option<String> {
    let lower = def.system_prompt.to_lowercase();

    let indicator_hits: usize = EXAMPLE_INDICATORS
        .iter()
        .map(|token| count_occurrences(&lower, token))
        .sum();
    if indicator_hits < MIN_EXAMPLE_INDICATORS {
        return Some(format!(
            "system prompt lacks worked examples: {} example indicators found, expected at least {} \
             (at least two examples with input and output)",
            indicator_hits, MIN_EXAMPLE_INDICATORS
        ));
    }

    let example_words: usize = EXAMPLE_WORDS
        .iter()
        .map(|word| count_occurrences(&lower, word))
        .sum();
    if example_words < MIN_EXAMPLE_WORDS {
        return Some(format!(
            "system prompt must reference at least {} worked examples, found {}",
            MIN_EXAMPLE_WORDS, example_words
        ));
    }

    None
}

fn check_pending_markers(def: &PromptDefinition) -> Option<String> {
    let fields = [
        ("system_prompt", &def.system_prompt),
        ("user_prompt", &def.user_prompt),
        ("description", &def.description),
    ];

    for (field_name, content) in fields {
        let lower = content.to_lowercase();
        for marker in PENDING_MARKERS {
            if lower.contains(marker) {
                return Some(format!(
                    "field '{}' contains pending marker '{}'",
                    field_name, marker
                ));
            }
        }
    }

    None
}

fn check_techniques(def: &PromptDefinition) -> Option<String> {
    if def.techniques.len() < MIN_TECHNIQUES {
        return Some(format!(
            "at least {} prompting techniques must be documented, found {}",
            MIN_TECHNIQUES,
            def.techniques.len()
        ));
    }

    for (i, technique) in def.techniques.iter().enumerate() {
        let trimmed = technique.trim();
        if trimmed.chars().count() <= MIN_TECHNIQUE_CHARS {
            return Some(format!(
                "technique {} is too short to be a description: '{}'",
                i + 1,
                trimmed
            ));
        }
    }

    None
}
