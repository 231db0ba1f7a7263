#![forbid(unsafe_code)]

// `*_fold` columns hold the Unicode-lowercased text used by substring search.
pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS questions (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL UNIQUE,
          title TEXT NOT NULL,
          content TEXT NOT NULL,
          title_fold TEXT NOT NULL,
          content_fold TEXT NOT NULL,
          author_id TEXT NOT NULL REFERENCES users(id),
          views INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS answers (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL UNIQUE,
          question_id TEXT NOT NULL REFERENCES questions(id),
          author_id TEXT NOT NULL REFERENCES users(id),
          content TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tags (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL UNIQUE,
          name TEXT NOT NULL,
          name_key TEXT NOT NULL UNIQUE,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS interactions (
          seq INTEGER PRIMARY KEY AUTOINCREMENT,
          user_id TEXT NOT NULL REFERENCES users(id),
          action TEXT NOT NULL,
          question_id TEXT REFERENCES questions(id),
          answer_id TEXT REFERENCES answers(id),
          tags_json TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL
        );
"#;
