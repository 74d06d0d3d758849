//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity errors travel inside
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` unchanged when it is a plumbing
    /// error or when the boxed error is of a different type.
    ///
    /// ```rust
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("out of stock")]
    /// struct OutOfStock;
    ///
    /// let err = FrameworkError::EntityError(Box::new(OutOfStock));
    /// assert_eq!(err.downcast_entity::<OutOfStock>().unwrap(), OutOfStock);
    ///
    /// let closed = FrameworkError::ActorClosed.downcast_entity::<OutOfStock>();
    /// assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    /// ```
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
