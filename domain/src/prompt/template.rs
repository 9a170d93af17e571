//! Prompt templates for classification and every answering strategy

/// Templates for generating prompts at each routing stage
pub struct PromptTemplate;

impl PromptTemplate {
    // ==================== Classifier ====================

    /// System prompt for the classifier call
    pub fn classifier_system() -> &'static str {
        "You are a classifier. Your job is to look at a question and assign exactly one category. "
    }

    /// User prompt for the classifier call
    pub fn classifier_prompt(question: &str) -> String {
        format!(
            r#"Classify the following question as one of the following:

- math
- coding
- futurePrediction
- planning
- commonSense

Rules:
- Respond with exactly one word.
- 'math' means contest-style math, numeric answers, equations, geometry, counting, etc.
- 'coding' means programming questions, code interpretation, debugging, writing functions, etc.
- 'futurePlanning' means the question has the words "the event to be predicted:"
- 'planning' means the sentence starts with "I am" in a planning context.
- 'commonSense' means the question is really simple and straightforward, and not the other ones.

Question:
{}
"#,
            question
        )
    }

    // ==================== Chain of thought ====================

    pub fn chain_of_thought_system() -> &'static str {
        "You are an expert contest math solver. Always follow the user's formatting instructions exactly."
    }

    /// Step-by-step prompt ending in a `Final answer: <integer>` line
    pub fn chain_of_thought_prompt(question: &str) -> String {
        format!(
            r#"Solve the problem step by step in plain text.
Use at most 4 short steps, each on its own line.
After the steps, on the very last line, write EXACTLY:

Final answer: <integer>

Replace <integer> with the final numeric answer and nothing else.

Problem:
{}
"#,
            question
        )
    }

    // ==================== Direct answers ====================

    pub fn direct_system() -> &'static str {
        "You are a helpful assistant. Reply with only the final answer, no explanation."
    }

    pub fn domain_direct_system() -> &'static str {
        "You are a concise, reliable question-answering assistant. \
         Use any necessary reasoning internally, but reply with only the final answer, \
         as a short phrase or sentence, no explanation."
    }

    pub fn coding_system() -> &'static str {
        "You are a professional coding agent. \
         You analyze programs, debug code, and compute outputs. \
         Think like a programmer and return ONLY the final answer. \
         Do not explain. Do not include imports unless required by the question."
    }

    pub fn future_prediction_system() -> &'static str {
        "You are a future prediction assistant. \
         Your job is to read a scenario and give the predicted outcome. \
         Output ONLY what the question asks for. No explanation."
    }

    pub fn planning_system() -> &'static str {
        "You are a planning and decision-making assistant. \
         You help determine the next steps, decisions, or actions. \
         Output only the final recommended answer with no explanation."
    }

    // ==================== Few-shot multiple choice ====================

    pub fn multiple_choice_system() -> &'static str {
        "You answer questions using the patterns shown in the examples. \
         Reply with only the final answer (a single letter like A, B, C, or D, \
         or a short phrase), no explanation."
    }

    /// Worked examples prepended to every multiple-choice prompt
    pub fn multiple_choice_examples() -> &'static str {
        r#"Q: A student walks to school one morning and notices the grass is wet. Which process most likely caused the grass to be wet?
    A. condensation  B. erosion  C. evaporation  D. precipitation
Answer: D

Q: Which part of the plant is mainly responsible for photosynthesis?
    A. roots  B. stems  C. leaves  D. flowers
Answer: C

Q: Water turns into water vapor in which process?
    A. freezing  B. melting  C. evaporation  D. condensation
Answer: C"#
    }

    pub fn multiple_choice_prompt(question: &str) -> String {
        format!(
            "{}\n\nNow answer this question in the same format:\n\nQ: {}\nAnswer:",
            Self::multiple_choice_examples(),
            question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_prompt_lists_all_labels() {
        let prompt = PromptTemplate::classifier_prompt("What is 2+2?");
        for label in ["math", "coding", "futurePrediction", "planning", "commonSense"] {
            assert!(prompt.contains(&format!("- {label}")), "missing {label}");
        }
        assert!(prompt.ends_with("What is 2+2?\n"));
    }

    #[test]
    fn test_chain_of_thought_prompt_requests_marker() {
        let prompt = PromptTemplate::chain_of_thought_prompt("1+1");
        assert!(prompt.contains("Final answer: <integer>"));
        assert!(prompt.contains("at most 4 short steps"));
        assert!(prompt.contains("Problem:\n1+1"));
    }

    #[test]
    fn test_multiple_choice_prompt_has_three_examples() {
        let prompt = PromptTemplate::multiple_choice_prompt("Which? A. x B. y");
        assert_eq!(prompt.matches("Answer:").count(), 4);
        assert!(prompt.ends_with("Q: Which? A. x B. y\nAnswer:"));
    }
}
