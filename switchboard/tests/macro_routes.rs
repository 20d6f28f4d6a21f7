//! Dispatch through handlers declared with `#[routes]`.

use std::fmt;
use switchboard::{BuildError, HandlerBuilder, Registry};
use switchboard_macros::routes;

mod common;
use common::{Action, TextArgs, Todo, text_kind, todo_kind};

struct TodoReducer;

#[routes]
impl TodoReducer {
    #[handler("ADD_TODO")]
    fn add_todo(&self, state: Vec<Todo>, action: Action) -> Vec<Todo> {
        common::add_todo(state, action)
    }
}

struct WithDefault;

#[routes]
impl WithDefault {
    #[handler("ADD_TODO")]
    fn add_todo(&self, _state: String, _action: Action) -> Option<String> {
        None
    }

    #[default_handler]
    fn fallback(&self, state: String, _action: Action) -> Option<String> {
        Some(state + "!")
    }
}

struct AddOnly;

#[routes]
impl AddOnly {
    #[handler("ADD_TODO")]
    fn add_todo(&self, _state: String, _action: Action) -> Option<String> {
        None
    }
}

#[test]
fn test_build() {
    let reducer = HandlerBuilder::new(todo_kind)
        .build_routable(TodoReducer)
        .unwrap();

    let state = reducer
        .dispatch((Vec::new(), Action::add_todo("learn Portuguese", false)))
        .unwrap();

    assert_eq!(
        state,
        vec![Todo {
            what: "learn Portuguese".to_string(),
            done: false,
        }]
    );
}

#[test]
fn test_default_handler() {
    let reducer = HandlerBuilder::new(text_kind)
        .build_routable(WithDefault)
        .unwrap();

    let out = reducer.dispatch(("test".to_string(), Action::of("foo")));
    assert_eq!(out.unwrap().as_deref(), Some("test!"));
}

#[test]
fn test_default_value() {
    let reducer = HandlerBuilder::new(text_kind)
        .with_default_value(Some("the default".to_string()))
        .build_routable(AddOnly)
        .unwrap();

    let out = reducer.dispatch(("test".to_string(), Action::of("foo")));
    assert_eq!(out.unwrap().as_deref(), Some("the default"));
}

#[test]
fn test_default_function() {
    let reducer = HandlerBuilder::new(text_kind)
        .with_default_fn(|(state, _): TextArgs| Some(state + "!"))
        .build_routable(AddOnly)
        .unwrap();

    let out = reducer.dispatch(("test".to_string(), Action::of("foo")));
    assert_eq!(out.unwrap().as_deref(), Some("test!"));
}

#[test]
fn test_no_default() {
    let reducer = HandlerBuilder::new(text_kind)
        .build_routable(AddOnly)
        .unwrap();

    let err = reducer
        .dispatch(("test".to_string(), Action::of("foo")))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matching handler or default value available for foo"
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Op {
    Inc,
    Add,
    Reset,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Inc => "inc",
            Op::Add => "add",
            Op::Reset => "reset",
        };
        f.write_str(name)
    }
}

struct Counter {
    step: i64,
}

#[routes(key = Op)]
impl Counter {
    #[handler(Op::Inc)]
    #[handler(Op::Add)]
    fn bump(&self, n: i64, _op: Op) -> i64 {
        n + self.step()
    }

    fn step(&self) -> i64 {
        self.step
    }
}

#[test]
fn test_stacked_keys_and_receiver_state() {
    let counter = HandlerBuilder::new(|(_, op): &(i64, Op)| *op)
        .build_routable(Counter { step: 5 })
        .unwrap();

    assert_eq!(counter.dispatch((1, Op::Inc)).unwrap(), 6);
    assert_eq!(counter.dispatch((2, Op::Add)).unwrap(), 7);
    assert_eq!(counter.len(), 2);
    let err = counter.dispatch((0, Op::Reset)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matching handler or default value available for reset"
    );
}

struct OnlyDefault;

#[routes(key = &'static str)]
impl OnlyDefault {
    #[default_handler]
    fn any(&self, state: String, _action: Action) -> Option<String> {
        Some(state)
    }
}

#[test]
fn test_default_only_target_has_no_routes() {
    let result = HandlerBuilder::new(text_kind).build_routable(OnlyDefault);
    assert_eq!(result.err(), Some(BuildError::NoRoutes));
}

#[test]
fn test_declared_routes_extend_imperatively() {
    let mut routes = Registry::routable(AddOnly);
    routes.on("SHOUT", |_, (state, _)| Some(state.to_uppercase()));

    let reducer = HandlerBuilder::new(text_kind).build(&routes).unwrap();
    let out = reducer.dispatch(("hey".to_string(), Action::of("SHOUT")));
    assert_eq!(out.unwrap().as_deref(), Some("HEY"));

    let out = reducer.dispatch(("hey".to_string(), Action::of("ADD_TODO")));
    assert_eq!(out.unwrap(), None);
}
