#![forbid(unsafe_code)]

mod answers;
mod questions;
mod render;
mod tags;
mod users;
mod votes;

use crate::support::ActionResult;
use crate::support::args::Args;
use qa_storage::SqliteStore;
use serde_json::{Value, json};

type Handler = fn(&mut SqliteStore, &Args) -> ActionResult;

pub(crate) struct ActionDef {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    /// Successful calls revalidate the caller's `path`.
    pub(crate) mutates: bool,
    pub(crate) handler: Handler,
}

const fn read(name: &'static str, summary: &'static str, handler: Handler) -> ActionDef {
    ActionDef {
        name,
        summary,
        mutates: false,
        handler,
    }
}

const fn write(name: &'static str, summary: &'static str, handler: Handler) -> ActionDef {
    ActionDef {
        name,
        summary,
        mutates: true,
        handler,
    }
}

const ACTIONS: &[ActionDef] = &[
    write("user.create", "Create a user profile", users::create),
    read("user.get", "Fetch a user by id", users::get),
    read("user.interactions", "List a user's interaction log", users::interactions),
    write("question.create", "Ask a question", questions::create),
    read("question.get", "Fetch a question", questions::get),
    write("question.edit", "Replace a question's title and content", questions::edit),
    read("question.list", "Search, filter and page questions", questions::list),
    write("question.view", "Count a view of a question", questions::view),
    write("question.upvote", "Toggle an upvote on a question", votes::question_upvote),
    write("question.downvote", "Toggle a downvote on a question", votes::question_downvote),
    write("question.delete", "Delete a question and everything referencing it", questions::delete),
    write("question.save", "Toggle a question in the user's saved set", questions::save),
    read("question.saved", "Page the user's saved questions", questions::saved),
    write("answer.create", "Answer a question", answers::create),
    read("answer.list", "Page a question's answers", answers::list),
    write("answer.upvote", "Toggle an upvote on an answer", votes::answer_upvote),
    write("answer.downvote", "Toggle a downvote on an answer", votes::answer_downvote),
    write("answer.delete", "Delete an answer and its interactions", answers::delete),
    read("tag.get", "Look up a tag by name", tags::get),
];

pub(crate) fn find_action(name: &str) -> Option<&'static ActionDef> {
    ACTIONS.iter().find(|def| def.name == name)
}

pub(crate) fn action_definitions() -> Value {
    Value::Array(
        ACTIONS
            .iter()
            .map(|def| {
                json!({
                    "name": def.name,
                    "description": def.summary,
                    "mutates": def.mutates,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn action_names_are_unique_and_dotted() {
        let mut seen = HashSet::new();
        for def in ACTIONS {
            assert!(seen.insert(def.name), "duplicate action {}", def.name);
            assert!(def.name.contains('.'), "undotted action {}", def.name);
        }
        assert_eq!(ACTIONS.len(), 19);
    }

    #[test]
    fn reads_do_not_mutate() {
        for name in ["user.get", "question.list", "answer.list", "tag.get"] {
            assert!(!find_action(name).expect("known").mutates);
        }
        assert!(find_action("question.delete").expect("known").mutates);
        assert!(find_action("question.nope").is_none());
    }
}
