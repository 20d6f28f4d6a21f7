//! Shared fixtures: a small todo-list reducer domain.

#![allow(dead_code)]

/// A todo item, the reducer's state element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub what: String,
    pub done: bool,
}

/// A reducer action; `kind` is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: &'static str,
    pub what: String,
    pub done: bool,
}

impl Action {
    pub fn add_todo(what: &str, done: bool) -> Self {
        Self {
            kind: "ADD_TODO",
            what: what.to_string(),
            done,
        }
    }

    pub fn of(kind: &'static str) -> Self {
        Self {
            kind,
            what: String::new(),
            done: false,
        }
    }
}

/// Arguments of the todo-list reducer.
pub type TodoArgs = (Vec<Todo>, Action);

/// Arguments of the string-state reducer used by the fallback scenarios.
pub type TextArgs = (String, Action);

pub fn todo_kind((_, action): &TodoArgs) -> &'static str {
    action.kind
}

pub fn text_kind((_, action): &TextArgs) -> &'static str {
    action.kind
}

pub fn add_todo(mut state: Vec<Todo>, action: Action) -> Vec<Todo> {
    state.push(Todo {
        what: action.what,
        done: action.done,
    });
    state
}

/// The receiver handlers are declared on.
#[derive(Debug, Default)]
pub struct Todos;
