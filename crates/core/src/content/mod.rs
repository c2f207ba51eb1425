// Synthetic working-tree mutations.
//
// A run samples 1–3 mutation categories and applies the first unsaturated
// target in each. Existing files are never overwritten outright: the README
// only gains an appended section, structured config files only gain missing
// keys, and canned files are only created when absent. Any single category's
// I/O or parse failure degrades to "no change from that category".

pub mod catalog;

use std::fs;
use std::io;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::context::GeneratorContext;

type Mutation = fn(&mut GeneratorContext, &Path) -> io::Result<bool>;

const MUTATIONS: &[(&str, Mutation)] = &[
    ("readme", update_readme),
    ("config", update_config),
    ("docs", add_doc_file),
    ("tests", add_test_file),
    ("utils", add_util_file),
    ("styles", add_style_file),
    ("components", add_component_file),
];

/// Apply a random subset of mutation categories under `root`.
///
/// Returns `true` when at least one file was actually written. `false`
/// means every sampled category was already saturated and the caller should
/// skip the commit.
pub fn apply_changes(ctx: &mut GeneratorContext, root: &Path) -> bool {
    let count = ctx.rng().gen_range(1..=3);
    let sampled: Vec<&(&str, Mutation)> =
        MUTATIONS.choose_multiple(ctx.rng(), count).collect();

    let mut changed = false;
    for (category, mutation) in sampled {
        match mutation(ctx, root) {
            Ok(true) => {
                debug!(category, "content mutation applied");
                changed = true;
            }
            Ok(false) => {}
            Err(error) => debug!(category, %error, "content mutation skipped"),
        }
    }
    changed
}

// ── README ──────────────────────────────────────────────────────────

fn update_readme(ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    let path = root.join(catalog::README_NAME);

    if !path.exists() {
        fs::write(&path, catalog::README_BOILERPLATE)?;
        return Ok(true);
    }

    let current = fs::read_to_string(&path)?;
    if catalog::README_SECTIONS.iter().any(|section| current.contains(section.trim())) {
        return Ok(false);
    }

    let section = *catalog::README_SECTIONS
        .choose(ctx.rng())
        .expect("readme section catalog is non-empty");
    fs::write(&path, current + section)?;
    Ok(true)
}

// ── Structured config files ─────────────────────────────────────────

fn update_config(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    // Tried in a fixed order; the first file that gains a key wins. A file
    // with unparseable contents is skipped, not an error.
    let edits: &[(&str, fn(&Path) -> bool)] = &[
        ("next.config.ts", splice_next_config),
        ("package.json", extend_package_scripts),
        ("tsconfig.json", enable_tsconfig_strict),
        (".eslintrc.json", extend_eslint_rules),
    ];

    for (file, edit) in edits {
        let path = root.join(file);
        if path.exists() && edit(&path) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn splice_next_config(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else { return false };
    if content.contains("experimental") || !content.contains(catalog::NEXT_CONFIG_ANCHOR) {
        return false;
    }
    let updated = content.replace(catalog::NEXT_CONFIG_ANCHOR, catalog::NEXT_CONFIG_SPLICE);
    fs::write(path, updated).is_ok()
}

fn extend_package_scripts(path: &Path) -> bool {
    let Some(mut value) = read_json(path) else { return false };
    let Some(scripts) = value.get_mut("scripts").and_then(Value::as_object_mut) else {
        return false;
    };

    for (name, command) in catalog::PACKAGE_SCRIPTS {
        if !scripts.contains_key(*name) {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
            return write_json(path, &value);
        }
    }
    false
}

fn enable_tsconfig_strict(path: &Path) -> bool {
    let Some(mut value) = read_json(path) else { return false };
    let Some(options) = value.get_mut("compilerOptions").and_then(Value::as_object_mut) else {
        return false;
    };

    if options.contains_key("strict") {
        return false;
    }
    options.insert("strict".to_string(), Value::Bool(true));
    write_json(path, &value)
}

fn extend_eslint_rules(path: &Path) -> bool {
    let Some(mut value) = read_json(path) else { return false };
    let Some(rules) = value.get_mut("rules").and_then(Value::as_object_mut) else {
        return false;
    };

    for (rule, level) in catalog::ESLINT_RULES {
        if !rules.contains_key(*rule) {
            rules.insert(rule.to_string(), Value::String(level.to_string()));
            return write_json(path, &value);
        }
    }
    false
}

fn read_json(path: &Path) -> Option<Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn write_json(path: &Path, value: &Value) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(serialized) => fs::write(path, serialized + "\n").is_ok(),
        Err(_) => false,
    }
}

// ── Canned file categories ──────────────────────────────────────────

fn add_doc_file(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    create_first_absent(root, "docs", catalog::DOC_FILES, catalog::doc_body)
}

fn add_test_file(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    create_first_absent(root, "__tests__", catalog::TEST_FILES, catalog::test_body)
}

fn add_util_file(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    create_first_absent(root, "lib", catalog::UTIL_FILES, catalog::util_body)
}

fn add_style_file(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    create_first_absent(root, "styles", catalog::STYLE_FILES, catalog::style_body)
}

fn add_component_file(_ctx: &mut GeneratorContext, root: &Path) -> io::Result<bool> {
    create_first_absent(root, "components", catalog::COMPONENT_FILES, catalog::component_body)
}

fn create_first_absent(
    root: &Path,
    dir: &str,
    files: &[(&str, &str)],
    render: fn(&str) -> String,
) -> io::Result<bool> {
    let target_dir = root.join(dir);
    for (name, title) in files {
        let path = target_dir.join(name);
        if !path.exists() {
            fs::create_dir_all(&target_dir)?;
            fs::write(&path, render(title))?;
            return Ok(true);
        }
    }
    Ok(false)
}
