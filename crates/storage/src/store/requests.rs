#![forbid(unsafe_code)]

use qa_core::{AnswerId, AnswerSort, PageRequest, QuestionId, QuestionSort, UserId, VoteDirection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub picture: Option<String>,
    pub bio: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditQuestionRequest {
    pub question_id: QuestionId,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuestionsRequest {
    pub search: Option<String>,
    pub sort: Option<QuestionSort>,
    pub page: PageRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateAnswerRequest {
    pub content: String,
    pub author_id: UserId,
    pub question_id: QuestionId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListAnswersRequest {
    pub question_id: QuestionId,
    pub sort: Option<AnswerSort>,
    pub page: PageRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteRequest<T> {
    pub target_id: T,
    pub voter_id: UserId,
    pub direction: VoteDirection,
}

pub type QuestionVoteRequest = VoteRequest<QuestionId>;
pub type AnswerVoteRequest = VoteRequest<AnswerId>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedQuestionsRequest {
    pub user_id: UserId,
    pub search: Option<String>,
    pub page: PageRequest,
}
