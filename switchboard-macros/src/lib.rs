use proc_macro::TokenStream;

mod routes;

/// Declare the handlers of a type on its `impl` block.
///
/// Methods marked `#[handler(KEY)]` are registered for `KEY` (stacking several
/// `#[handler]` attributes registers the method under each key), and a method
/// marked `#[default_handler]` becomes the default handler. The macro keeps the
/// methods as written and adds an implementation of `switchboard::Routable`.
///
/// Handler methods take `&self` followed by owned parameters; the parameters
/// form the argument tuple the dispatcher is called with. All routed methods
/// must have the same parameter and return types.
///
/// The key type is given with `key = Type`, or inferred as `&'static str` when
/// the first key is a string literal.
///
/// # Example
///
/// ```rust,ignore
/// struct Todos;
///
/// #[switchboard::routes]
/// impl Todos {
///     #[handler("ADD_TODO")]
///     fn add_todo(&self, state: Vec<Todo>, action: Action) -> Vec<Todo> { ... }
///
///     #[default_handler]
///     fn unchanged(&self, state: Vec<Todo>, _action: Action) -> Vec<Todo> { state }
/// }
///
/// let dispatch = HandlerBuilder::new(|(_, action): &(Vec<Todo>, Action)| action.kind)
///     .build_routable(Todos)?;
/// ```
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    routes::routes_impl(attr, item)
}
