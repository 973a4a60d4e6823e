//! Prompt assembly.
//!
//! [`build_prompt`] is a pure function: the same inputs always produce the
//! same prompt text, and nothing here touches the filesystem or network.

/// Formatting contract given to the model so the output router can split the
/// response back into named files. The model is expected, but not guaranteed,
/// to honor it.
const FORMATTING_RULES: &str = "Formatting Rules:\n\
Separate each generated file with a line containing only ---.\n\
Name each file on the line immediately before its content.\n\
Use the .yaml extension for YAML content.\n\
Do not wrap the output in code fences.\n";

/// Build the full prompt from examples, rulesets, a technology label, and the
/// final instruction.
///
/// Section order: role preamble, formatting rules, environment rules, use
/// case rules, numbered examples, instruction. Empty rule collections skip
/// their section entirely; an empty instruction still emits the section
/// header (the caller decides whether such a prompt is worth sending).
pub fn build_prompt(
    examples: &[String],
    env_rules: &[String],
    usecase_rules: &[String],
    technology: &str,
    instruction: &str,
) -> String {
    let technology = if technology.is_empty() {
        "technology"
    } else {
        technology
    };

    let mut prompt = String::new();

    prompt.push_str(&format!("You are a {} expert.\n\n", technology));
    prompt.push_str(FORMATTING_RULES);
    prompt.push('\n');

    if !env_rules.is_empty() {
        prompt.push_str("Environment Rules:\n");
        for rule in env_rules {
            prompt.push_str(rule);
            prompt.push_str("\n---\n");
        }
        prompt.push('\n');
    }

    if !usecase_rules.is_empty() {
        prompt.push_str("Use Case Rules:\n");
        for rule in usecase_rules {
            prompt.push_str(rule);
            prompt.push_str("\n---\n");
        }
        prompt.push('\n');
    }

    prompt.push_str("Examples:\n");
    for (i, example) in examples.iter().enumerate() {
        prompt.push_str(&format!("Example {}:\n{}\n\n", i + 1, example));
    }

    prompt.push_str(&format!("Instruction:\n{}\n", instruction));

    prompt
}

/// Synthesize the default instruction when the user did not supply one.
pub fn default_instruction(usecase: &str) -> String {
    format!(
        "Generate a {} configuration. Only return one file definition, no description.",
        usecase
    )
}
