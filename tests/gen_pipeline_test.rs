//! End-to-end test of the load -> deduplicate -> build-prompt sequence,
//! exercising everything up to (but not including) the provider call.

use exgen::generator::build_prompt;
use exgen::loader::{deduplicate, load_directory, load_files, load_rulesets_if_exists};
use tempfile::TempDir;

#[test]
fn test_examples_and_rulesets_flow_into_prompt() {
    let examples_dir = TempDir::new().unwrap();
    std::fs::write(examples_dir.path().join("a.yaml"), "kind: A").unwrap();
    std::fs::write(examples_dir.path().join("b.yaml"), "kind: B").unwrap();
    std::fs::write(examples_dir.path().join("skip.txt"), "not an example").unwrap();

    let rules_dir = TempDir::new().unwrap();
    std::fs::write(rules_dir.path().join("env.md"), "no privileged pods").unwrap();

    let extra_file = examples_dir.path().join("a.yaml");

    // Same file provided twice: once via the directory walk, once explicitly.
    let mut examples = load_directory(examples_dir.path(), &[".yaml".to_string()]).unwrap();
    examples.extend(load_files(&[extra_file.to_string_lossy().into_owned()]).unwrap());
    assert_eq!(examples.len(), 3);
    let examples = deduplicate(examples);
    assert_eq!(examples.len(), 2);

    let env_rules = load_rulesets_if_exists(&rules_dir.path().to_string_lossy()).unwrap();
    let usecase_rules = load_rulesets_if_exists("/no/such/ruleset/dir").unwrap();
    assert!(usecase_rules.is_empty());

    let prompt = build_prompt(
        &examples,
        &env_rules,
        &usecase_rules,
        "kubernetes",
        "Generate a pod.",
    );

    assert!(prompt.starts_with("You are a kubernetes expert."));
    assert!(prompt.contains("Environment Rules:\nFilename: env.md\nno privileged pods\n---\n"));
    assert!(!prompt.contains("Use Case Rules:"));
    assert!(prompt.contains("Example 1:\nkind: A"));
    assert!(prompt.contains("Example 2:\nkind: B"));
    assert!(prompt.contains("Instruction:\nGenerate a pod.\n"));
    assert!(!prompt.contains("not an example"));
}
