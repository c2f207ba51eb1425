// Conventional-commit message generator.
//
// Messages are assembled from fixed catalogs: a commit type, a scope, a
// type-specific verb phrase, and a type-specific fill-in word. Types without
// a grammar fall back to `{type}({scope}): update {component}`.

use rand::seq::SliceRandom;

use crate::context::GeneratorContext;

pub const COMMIT_TYPES: &[&str] =
    &["feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "build"];

pub const SCOPES: &[&str] =
    &["ui", "api", "auth", "database", "config", "utils", "components", "styles", "docs", "tests"];

const FEATURES: &[&str] = &[
    "user authentication",
    "data validation",
    "error handling",
    "loading states",
    "responsive design",
    "accessibility",
    "performance optimization",
    "security",
    "caching",
    "logging",
    "monitoring",
    "deployment",
    "testing",
    "documentation",
    "code formatting",
    "linting",
    "build process",
    "CI/CD",
    "database queries",
    "API endpoints",
    "middleware",
    "utilities",
    "components",
    "hooks",
    "context",
];

const ISSUES: &[&str] = &[
    "memory leak",
    "performance issue",
    "security vulnerability",
    "UI bug",
    "data inconsistency",
    "race condition",
    "type error",
    "build failure",
    "test failure",
    "deployment issue",
    "accessibility issue",
    "mobile layout",
    "browser compatibility",
    "API timeout",
    "validation error",
    "authentication bug",
];

const COMPONENTS: &[&str] = &[
    "user interface",
    "data layer",
    "authentication system",
    "error boundary",
    "form validation",
    "state management",
    "routing",
    "API client",
    "database",
    "caching layer",
    "logging system",
    "monitoring",
    "build configuration",
    "test suite",
    "documentation",
    "deployment script",
    "utility functions",
];

const DOC_KINDS: &[&str] =
    &["README", "API docs", "component docs", "setup guide", "troubleshooting guide"];

struct Grammar {
    commit_type: &'static str,
    verbs: &'static [&'static str],
    words: &'static [&'static str],
}

const GRAMMARS: &[Grammar] = &[
    Grammar {
        commit_type: "feat",
        verbs: &["add", "implement", "introduce", "add support for"],
        words: FEATURES,
    },
    Grammar {
        commit_type: "fix",
        verbs: &["resolve", "correct", "address", "patch"],
        words: ISSUES,
    },
    Grammar {
        commit_type: "docs",
        verbs: &["update", "improve", "add", "clarify"],
        words: DOC_KINDS,
    },
    Grammar {
        commit_type: "refactor",
        verbs: &["improve", "optimize", "restructure", "simplify"],
        words: COMPONENTS,
    },
    Grammar {
        commit_type: "test",
        verbs: &[
            "add tests for",
            "improve test coverage for",
            "add integration tests for",
            "update test cases for",
        ],
        words: COMPONENTS,
    },
    Grammar {
        commit_type: "chore",
        verbs: &["update", "clean up", "organize", "maintain"],
        words: COMPONENTS,
    },
];

/// Generate one commit message. Always returns a non-empty
/// `type(scope): subject` string; the only side effect is advancing the
/// context's RNG.
pub fn generate(ctx: &mut GeneratorContext) -> String {
    let rng = ctx.rng();
    let commit_type = *COMMIT_TYPES.choose(rng).expect("commit type catalog is non-empty");
    let scope = *SCOPES.choose(rng).expect("scope catalog is non-empty");

    match GRAMMARS.iter().find(|grammar| grammar.commit_type == commit_type) {
        Some(grammar) => {
            let verb = grammar.verbs.choose(rng).expect("grammar verbs are non-empty");
            let word = grammar.words.choose(rng).expect("grammar words are non-empty");
            format!("{commit_type}({scope}): {verb} {word}")
        }
        None => {
            let component = COMPONENTS.choose(rng).expect("component catalog is non-empty");
            format!("{commit_type}({scope}): update {component}")
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn message_shape() -> regex::Regex {
        regex::Regex::new(r"^[a-z]+\([a-z]+\): .+$").expect("message shape pattern compiles")
    }

    #[test]
    fn message_is_never_empty() {
        let mut ctx = GeneratorContext::seeded(0);
        for _ in 0..64 {
            assert!(!generate(&mut ctx).is_empty());
        }
    }

    #[test]
    fn message_type_comes_from_the_catalog() {
        let mut ctx = GeneratorContext::seeded(42);
        for _ in 0..64 {
            let message = generate(&mut ctx);
            let commit_type = message.split('(').next().unwrap();
            assert!(
                COMMIT_TYPES.contains(&commit_type),
                "unknown commit type in {message:?}"
            );
        }
    }

    #[test]
    fn message_scope_comes_from_the_catalog() {
        let mut ctx = GeneratorContext::seeded(42);
        for _ in 0..64 {
            let message = generate(&mut ctx);
            let scope = message.split('(').nth(1).unwrap().split(')').next().unwrap();
            assert!(SCOPES.contains(&scope), "unknown scope in {message:?}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_message() {
        let mut a = GeneratorContext::seeded(99);
        let mut b = GeneratorContext::seeded(99);
        for _ in 0..16 {
            assert_eq!(generate(&mut a), generate(&mut b));
        }
    }

    #[test]
    fn every_grammar_type_is_a_known_commit_type() {
        for grammar in GRAMMARS {
            assert!(COMMIT_TYPES.contains(&grammar.commit_type));
            assert!(!grammar.verbs.is_empty());
            assert!(!grammar.words.is_empty());
        }
    }

    proptest! {
        #[test]
        fn generated_messages_match_the_conventional_shape(seed: u64) {
            let mut ctx = GeneratorContext::seeded(seed);
            let message = generate(&mut ctx);
            prop_assert!(message_shape().is_match(&message), "bad shape: {message:?}");
        }
    }
}
