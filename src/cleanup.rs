//! Cleanup actions accepted by `finally`.

/// A set of cleanup actions, run once each in the order given.
///
/// Implemented for:
/// - `()` - no actions
/// - tuples of up to 8 `FnOnce()` closures, which may all have different types
/// - `[F; N]` and `Vec<F>` where `F: FnOnce()`, including `Box<dyn FnOnce()>`
///
/// ```
/// use catch_this::Cleanup;
/// use std::cell::RefCell;
///
/// let order = RefCell::new(Vec::new());
/// (|| order.borrow_mut().push(1), || order.borrow_mut().push(2)).run();
/// assert_eq!(*order.borrow(), vec![1, 2]);
/// ```
pub trait Cleanup {
    /// Run every action, first to last.
    fn run(self);
}

impl Cleanup for () {
    #[inline]
    fn run(self) {}
}

// Tuple impls - lets `finally` take closures of different types
macro_rules! impl_cleanup_tuple {
    ($($action:ident),+) => {
        impl<$($action: FnOnce()),+> Cleanup for ($($action,)+) {
            #[allow(non_snake_case)]
            #[inline]
            fn run(self) {
                let ($($action,)+) = self;
                $($action();)+
            }
        }
    };
}

impl_cleanup_tuple!(A);
impl_cleanup_tuple!(A, B);
impl_cleanup_tuple!(A, B, C);
impl_cleanup_tuple!(A, B, C, D);
impl_cleanup_tuple!(A, B, C, D, E);
impl_cleanup_tuple!(A, B, C, D, E, F);
impl_cleanup_tuple!(A, B, C, D, E, F, G);
impl_cleanup_tuple!(A, B, C, D, E, F, G, H);

impl<F: FnOnce(), const N: usize> Cleanup for [F; N] {
    fn run(self) {
        for action in self {
            action();
        }
    }
}

impl<F: FnOnce()> Cleanup for Vec<F> {
    fn run(self) {
        for action in self {
            action();
        }
    }
}
