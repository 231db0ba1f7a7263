#![forbid(unsafe_code)]

// One row per (target, voter): a voter holds at most one direction per target.
pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS question_tags (
          question_id TEXT NOT NULL REFERENCES questions(id),
          tag_id TEXT NOT NULL REFERENCES tags(id),
          position INTEGER NOT NULL,
          PRIMARY KEY (question_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS question_votes (
          question_id TEXT NOT NULL REFERENCES questions(id),
          user_id TEXT NOT NULL REFERENCES users(id),
          direction TEXT NOT NULL CHECK(direction IN ('up', 'down')),
          updated_at_ms INTEGER NOT NULL,
          PRIMARY KEY (question_id, user_id)
        );

        CREATE TABLE IF NOT EXISTS answer_votes (
          answer_id TEXT NOT NULL REFERENCES answers(id),
          user_id TEXT NOT NULL REFERENCES users(id),
          direction TEXT NOT NULL CHECK(direction IN ('up', 'down')),
          updated_at_ms INTEGER NOT NULL,
          PRIMARY KEY (answer_id, user_id)
        );

        CREATE TABLE IF NOT EXISTS saved_questions (
          user_id TEXT NOT NULL REFERENCES users(id),
          question_id TEXT NOT NULL REFERENCES questions(id),
          saved_at_ms INTEGER NOT NULL,
          PRIMARY KEY (user_id, question_id)
        );
"#;
