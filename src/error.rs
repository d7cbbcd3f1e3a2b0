//! Captured error type and panic payload conversion.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::OnceLock;

// ============================================================
// Error - type-erased captured error
// ============================================================

/// Type-erased error captured from a panic.
///
/// This is a newtype around `Box<dyn StdError + Send + Sync>` that also
/// remembers the name of the concrete type it was built from. It does NOT
/// implement `std::error::Error` itself, so that any error type converts
/// into it through the blanket `From` impl.
///
/// The concrete type is preserved inside and is what `catch` matches on:
///
/// ```
/// use catch_this::Error;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// let err = Error::new(Timeout);
/// assert!(err.is::<Timeout>());
/// assert_eq!(err.message(), "timed out");
/// ```
#[derive(Debug)]
pub struct Error {
    inner: Box<dyn StdError + Send + Sync + 'static>,
    type_name: &'static str,
    /// Lazy message - only computed when accessed via `message()`.
    message: OnceLock<String>,
}

/// Type name reported for errors whose concrete type is unknown.
const ERASED_TYPE_NAME: &str = "dyn std::error::Error";

/// Message used for panic payloads that are neither errors nor strings.
/// Matches what the standard panic hook prints for them.
pub(crate) const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

impl Error {
    /// Create from any error type, keeping its concrete type.
    #[inline]
    pub fn new<E: StdError + Send + Sync + 'static>(e: E) -> Self {
        Self {
            inner: Box::new(e),
            type_name: core::any::type_name::<E>(),
            message: OnceLock::new(),
        }
    }

    /// Create from a boxed error.
    ///
    /// The concrete type stays matchable by `catch`, but `type_name()`
    /// only reports a generic name.
    #[inline]
    pub fn from_box(e: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: e,
            type_name: ERASED_TYPE_NAME,
            message: OnceLock::new(),
        }
    }

    /// Create a generic error from a message.
    /// Message is pre-initialized since we already have it.
    pub fn msg(message: impl Into<String>) -> Self {
        let message = message.into();
        let msg_lock = OnceLock::new();
        let _ = msg_lock.set(message.clone());
        Self {
            inner: Box::new(StringError(message)),
            type_name: core::any::type_name::<StringError>(),
            message: msg_lock,
        }
    }

    /// Convert an `anyhow::Error`.
    ///
    /// The report's message and source chain are kept; its concrete root
    /// type is not matchable by typed `catch`.
    #[cfg(feature = "anyhow")]
    pub fn from_anyhow(e: anyhow::Error) -> Self {
        Self::from_box(e.into())
    }

    /// Get the error message, computing it lazily on first access.
    pub fn message(&self) -> &str {
        self.message.get_or_init(|| self.inner.to_string())
    }

    /// Name of the concrete type this error was created from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the concrete error type is exactly `T`.
    #[inline]
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Try to downcast to a specific error type.
    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Try to downcast and consume the error.
    #[inline]
    pub fn downcast<T: StdError + 'static>(self) -> Result<T, Self> {
        let Self {
            inner,
            type_name,
            message,
        } = self;
        match inner.downcast::<T>() {
            Ok(e) => Ok(*e),
            Err(inner) => Err(Self {
                inner,
                type_name,
                message,
            }),
        }
    }

    /// Get the inner error as a trait object reference.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Get the inner boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }

    /// Raise this error as a panic.
    ///
    /// An enclosing `r#try` captures it again unchanged.
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }

    /// Continue unwinding with an error that was already raised once.
    ///
    /// Unlike [`raise`](Self::raise) this does not invoke the panic hook.
    pub(crate) fn resume(self) -> ! {
        std::panic::resume_unwind(Box::new(self))
    }

    /// Convert a panic payload into a captured error.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(err) => return *err,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Box<dyn StdError + Send + Sync + 'static>>() {
            Ok(err) => return Self::from_box(*err),
            Err(payload) => payload,
        };
        #[cfg(feature = "anyhow")]
        let payload = match payload.downcast::<anyhow::Error>() {
            Ok(err) => return Self::from_anyhow(*err),
            Err(payload) => payload,
        };
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            return Self::msg(*s);
        }
        match payload.downcast::<String>() {
            Ok(s) => Self::msg(*s),
            Err(_) => Self::msg(OPAQUE_PAYLOAD),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// This doesn't conflict with From<T> for T because Error doesn't implement Error
impl<E: StdError + Send + Sync + 'static> From<E> for Error {
    fn from(e: E) -> Self {
        Error::new(e)
    }
}

// ============================================================
// StringError helper
// ============================================================

/// Generic error for panics whose payload is not an error.
///
/// `panic!("oops")` is captured as a `StringError` with message `"oops"`,
/// so `catch(|e: StringError| ..)` claims plain panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringError(pub(crate) String);

impl StringError {
    /// Create from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for StringError {}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Serialize, Serializer};

    impl Serialize for Error {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            let mut state = serializer.serialize_struct("Error", 2)?;
            state.serialize_field("type", self.type_name)?;
            state.serialize_field("message", self.message())?;
            state.end()
        }
    }

    impl Serialize for StringError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.0)
        }
    }
}
