use crate::db::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out the 1-based `page` of at most [`QUESTIONS_PER_PAGE`] questions.
/// A page past the end of the list, or below 1, comes back empty; callers
/// turn an empty page into a not-found response.
pub fn paginate_questions(questions: &[Question], page: i64) -> &[Question] {
    if page < 1 {
        return &[];
    }
    let start = (page as u64 - 1).saturating_mul(QUESTIONS_PER_PAGE as u64);
    if start >= questions.len() as u64 {
        return &[];
    }
    let start = start as usize;
    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}
