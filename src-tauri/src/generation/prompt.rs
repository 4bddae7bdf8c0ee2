use serde::{Deserialize, Serialize};

/// Bump when the instruction text below changes.
pub const PROMPT_VERSION: u32 = 1;

pub const EXAM_PROMPT: &str = "You are an expert IELTS exam creator. Your task is to generate a high-quality IELTS Listening exam section based on the provided text.\n\
\n\
Requirements:\n\
- Exam type: IELTS Listening\n\
- Total parts: 4\n\
- Difficulty progression: Part 1 (easy) -> Part 4 (hard)\n\
\n\
Structure:\n\
- Part 1: Social context conversation (Form completion, names, numbers)\n\
- Part 2: Monologue in social context (Map labeling, Multiple choice)\n\
- Part 3: Education/Training conversation (Multiple choice, Matching)\n\
- Part 4: Academic lecture (Sentence completion, Summary)\n\
\n\
Rules:\n\
- Do NOT copy exact words from the source text where synonyms work better.\n\
- Answers must be logically inferable from the text provided.\n\
- Use British English spelling.\n\
\n\
Output Format:\n\
Please format the output clearly with:\n\
1. [PART X] Heading\n\
2. Question numbers (1-10, etc.)\n\
3. The Question Text\n\
4. ANSWER KEY section at the very bottom.";

const SOURCE_LEAD_IN: &str = "Here is the source text to generate questions from:";

/// How the instruction block is combined with the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptStrategy {
    /// One user message: instructions, lead-in, transcript.
    #[default]
    #[serde(rename = "inline")]
    Inline,
    /// Instructions in `system_instruction`, transcript alone in the user message.
    #[serde(rename = "system_instruction")]
    SystemInstruction,
}

/// Text of the user message for the given strategy.
pub fn user_message(strategy: PromptStrategy, transcript: &str) -> String {
    match strategy {
        PromptStrategy::Inline => {
            format!("{}\n\n{}\n\n{}", EXAM_PROMPT, SOURCE_LEAD_IN, transcript)
        }
        PromptStrategy::SystemInstruction => transcript.to_string(),
    }
}

/// Text of the separate system instruction, if the strategy uses one.
pub fn system_instruction(strategy: PromptStrategy) -> Option<&'static str> {
    match strategy {
        PromptStrategy::Inline => None,
        PromptStrategy::SystemInstruction => Some(EXAM_PROMPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_prefixes_the_template() {
        let msg = user_message(PromptStrategy::Inline, "Lecturer: hello");
        assert!(msg.starts_with(EXAM_PROMPT));
        assert!(msg.ends_with("Here is the source text to generate questions from:\n\nLecturer: hello"));
        assert_eq!(system_instruction(PromptStrategy::Inline), None);
    }

    #[test]
    fn system_instruction_keeps_transcript_alone() {
        let msg = user_message(PromptStrategy::SystemInstruction, "Lecturer: hello");
        assert_eq!(msg, "Lecturer: hello");
        assert_eq!(
            system_instruction(PromptStrategy::SystemInstruction),
            Some(EXAM_PROMPT)
        );
    }

    #[test]
    fn template_names_four_parts_and_answer_key() {
        assert!(EXAM_PROMPT.contains("Total parts: 4"));
        assert!(EXAM_PROMPT.contains("ANSWER KEY"));
    }

    #[test]
    fn strategy_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&PromptStrategy::SystemInstruction).unwrap(),
            "\"system_instruction\""
        );
        assert_eq!(
            serde_json::from_str::<PromptStrategy>("\"inline\"").unwrap(),
            PromptStrategy::Inline
        );
    }
}
