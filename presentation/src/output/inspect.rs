//! Views over a questions file paired with its answers file

use rand::Rng;
use router_domain::{AnswerRecord, Question};
use serde::Serialize;

/// One question next to its stored answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerView {
    /// 0-based position in both files
    pub index: usize,
    pub input: String,
    /// `None` while the batch has not reached this question
    pub answer: Option<String>,
    pub gold: Option<String>,
}

impl AnswerView {
    fn new(index: usize, question: &Question, answer: Option<&AnswerRecord>) -> Self {
        Self {
            index,
            input: question.input().to_string(),
            answer: answer.map(|a| a.output.clone()),
            gold: question.gold().map(str::to_string),
        }
    }
}

/// Question `index` and its answer, or `None` when the index is out of range
pub fn inspect(questions: &[Question], answers: &[AnswerRecord], index: usize) -> Option<AnswerView> {
    questions
        .get(index)
        .map(|q| AnswerView::new(index, q, answers.get(index)))
}

/// Up to `count` distinct completed answers chosen at random, in index order
pub fn sample<R: Rng + ?Sized>(
    questions: &[Question],
    answers: &[AnswerRecord],
    count: usize,
    rng: &mut R,
) -> Vec<AnswerView> {
    let completed = answers.len().min(questions.len());
    let mut picked = rand::seq::index::sample(rng, completed, count.min(completed)).into_vec();
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|i| AnswerView::new(i, &questions[i], answers.get(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> (Vec<Question>, Vec<AnswerRecord>) {
        let questions = vec![
            Question::new("q0").with_gold("a0"),
            Question::new("q1"),
            Question::new("q2"),
            Question::new("q3"),
        ];
        let answers = vec![
            AnswerRecord::new("x0"),
            AnswerRecord::new("x1"),
            AnswerRecord::new("x2"),
        ];
        (questions, answers)
    }

    #[test]
    fn test_inspect_answered_question() {
        let (questions, answers) = fixture();
        let view = inspect(&questions, &answers, 0).unwrap();
        assert_eq!(view.input, "q0");
        assert_eq!(view.answer.as_deref(), Some("x0"));
        assert_eq!(view.gold.as_deref(), Some("a0"));
    }

    #[test]
    fn test_inspect_unanswered_and_out_of_range() {
        let (questions, answers) = fixture();
        assert_eq!(inspect(&questions, &answers, 3).unwrap().answer, None);
        assert!(inspect(&questions, &answers, 4).is_none());
    }

    #[test]
    fn test_sample_draws_only_completed_answers() {
        let (questions, answers) = fixture();
        let mut rng = StdRng::seed_from_u64(7);

        let views = sample(&questions, &answers, 10, &mut rng);

        assert_eq!(views.len(), 3);
        let indices: Vec<usize> = views.iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_sample_without_replacement() {
        let (questions, answers) = fixture();
        let mut rng = StdRng::seed_from_u64(1);

        let views = sample(&questions, &answers, 2, &mut rng);

        assert_eq!(views.len(), 2);
        assert_ne!(views[0].index, views[1].index);
        assert!(views.iter().all(|v| v.answer.is_some()));
    }
}
