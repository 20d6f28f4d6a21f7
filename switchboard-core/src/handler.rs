//! # Handler
//!
//! A handler is the code that runs when a discriminator matches. It receives
//! the registry's target as its receiver plus the full call arguments, and
//! whatever it returns is handed back to the dispatcher's caller unchanged.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|target: &Todos, (state, action)| ...`
//! 2. **Method reference**: `Todos::add_todo` when the method takes `(&self, Args)`
//! 3. **Struct implementation**: `impl Handler<Todos, Args> for MyHandler`

use std::sync::Arc;

/// A function registered for a discriminator key.
///
/// `T` is the receiver type (the target the handlers were declared on) and
/// `Args` is the full argument bundle passed to the dispatcher, usually a
/// tuple such as `(State, Action)`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle `{Args}` on `{T}`",
    label = "missing `Handler<{T}, {Args}>` implementation",
    note = "Handlers are `Fn(&T, Args) -> Output` closures or types implementing `Handler`."
)]
pub trait Handler<T: ?Sized, Args>: Send + Sync + 'static {
    /// The value the handler produces.
    type Output;

    /// Run the handler against `target`.
    fn call(&self, target: &T, args: Args) -> Self::Output;
}

// Blanket impl for closures
impl<F, T, Args, Out> Handler<T, Args> for F
where
    T: ?Sized,
    F: Fn(&T, Args) -> Out + Send + Sync + 'static,
{
    type Output = Out;

    fn call(&self, target: &T, args: Args) -> Self::Output {
        (self)(target, args)
    }
}

/// A type-erased handler shared between a registry and the tables built from it.
pub type SharedHandler<T, Args, Out> = Arc<dyn Handler<T, Args, Output = Out>>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Handler<i32, (i32,)> for Doubler {
        type Output = i32;

        fn call(&self, target: &i32, (n,): (i32,)) -> i32 {
            target * n * 2
        }
    }

    #[test]
    fn closure_and_struct_handlers_share_a_shape() {
        let closure: SharedHandler<i32, (i32,), i32> = Arc::new(|t: &i32, (n,): (i32,)| t + n);
        let strukt: SharedHandler<i32, (i32,), i32> = Arc::new(Doubler);

        assert_eq!(closure.call(&10, (5,)), 15);
        assert_eq!(strukt.call(&10, (5,)), 100);
    }
}
