#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_questions_created ON questions(created_at_ms, seq);
        CREATE INDEX IF NOT EXISTS idx_questions_views ON questions(views, seq);
        CREATE INDEX IF NOT EXISTS idx_answers_question_seq ON answers(question_id, seq);
        CREATE INDEX IF NOT EXISTS idx_question_tags_tag ON question_tags(tag_id, question_id);
        CREATE INDEX IF NOT EXISTS idx_question_tags_position ON question_tags(question_id, position);
        CREATE INDEX IF NOT EXISTS idx_question_votes_user ON question_votes(user_id);
        CREATE INDEX IF NOT EXISTS idx_answer_votes_user ON answer_votes(user_id);
        CREATE INDEX IF NOT EXISTS idx_saved_questions_question ON saved_questions(question_id);
        CREATE INDEX IF NOT EXISTS idx_interactions_user_seq ON interactions(user_id, seq);
        CREATE INDEX IF NOT EXISTS idx_interactions_question ON interactions(question_id);
        CREATE INDEX IF NOT EXISTS idx_interactions_answer ON interactions(answer_id);
"#;
