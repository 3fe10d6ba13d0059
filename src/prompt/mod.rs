// src/prompt/mod.rs
// Prompt construction for the code solution endpoint.

/// Build the instruction sent to the model for a code solution request.
///
/// Deterministic: embeds both inputs verbatim and asks for a single fenced
/// code block followed by a short complexity explanation, which is the shape
/// [`crate::parse::parse_reply`] expects back.
pub fn code_solution_prompt(problem_name: &str, language: &str) -> String {
    format!(
        "Provide a code solution for the problem '{problem_name}' in {language}. \
         The code solution should have the best possible time and space complexity. \
         Enclose the code in a single markdown code block. Following the code, \
         give a brief, well-formatted explanation of the code, including its \
         time and space complexity."
    )
}
