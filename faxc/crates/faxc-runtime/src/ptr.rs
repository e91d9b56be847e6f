//! Ptr - checked indirection for Fax `ptr<T>` values.
//!
//! A [`Ptr`] is a non-owning reference that is proven non-null when it is
//! built. Dereferencing a checked `Ptr` performs no further test. The only
//! way to hold a `Ptr` without a referent is the explicit unset state
//! ([`Ptr::unset`] / `Default`), used by generated code for
//! declare-before-assign; reading through an unset `Ptr` raises
//! `NullReference` instead of touching memory.
//!
//! # Example
//!
//! ```
//! use faxc_runtime::Ptr;
//!
//! let mut value = 41;
//! let mut p = Ptr::new(Some(&mut value)).unwrap();
//! *p += 1;
//! assert_eq!(*p, 42);
//!
//! let missing: Option<&mut i32> = None;
//! assert!(Ptr::new(missing).is_err());
//! ```

use crate::error::{RuntimeError, RuntimeResult};
use crate::violation::check;
use std::ops::{Deref, DerefMut};

/// A checked, non-owning reference to a `T`
///
/// The referent must outlive the wrapper; for the safe constructors the
/// borrow checker enforces this through `'a`. Dropping a `Ptr` never
/// affects the referent.
///
/// A `Ptr` holds an exclusive borrow. It cannot wrap a `&T`, and two live
/// `Ptr`s cannot name the same referent; generated code that aliases a
/// `ptr<T>` reads through one wrapper at a time, reborrowing with
/// [`Ptr::from_ref`] on `&mut *p` or moving the borrow out with
/// [`Ptr::take`].
///
/// ```compile_fail
/// use faxc_runtime::Ptr;
///
/// let mut value = 1;
/// let a = Ptr::from_ref(&mut value);
/// let b = Ptr::from_ref(&mut value);
/// assert_eq!(*a, *b);
/// ```
///
/// ```
/// use faxc_runtime::Ptr;
///
/// let mut value = 1;
/// let mut outer = Ptr::from_ref(&mut value);
/// {
///     let mut inner = Ptr::from_ref(&mut *outer);
///     *inner += 1;
/// }
/// assert_eq!(*outer, 2);
/// ```
#[derive(Debug)]
pub struct Ptr<'a, T> {
    target: Option<&'a mut T>,
}

impl<'a, T> Ptr<'a, T> {
    /// A wrapper with no referent
    #[inline]
    pub const fn unset() -> Self {
        Ptr { target: None }
    }

    /// Wrap a live reference. Cannot fail.
    #[inline]
    pub fn from_ref(target: &'a mut T) -> Self {
        Ptr {
            target: Some(target),
        }
    }

    /// Assert a possibly-absent reference is present
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NullReference`] when `target` is `None`.
    #[inline]
    pub fn new(target: Option<&'a mut T>) -> RuntimeResult<Self> {
        target.map(Ptr::from_ref).ok_or(RuntimeError::NullReference)
    }

    /// Like [`Ptr::new`], but raises the violation instead of returning it
    #[inline]
    #[track_caller]
    pub fn require(target: Option<&'a mut T>) -> Self {
        check(Self::new(target))
    }

    /// Wrap a raw pointer, rejecting null
    ///
    /// # Safety
    ///
    /// If `raw` is non-null it must be properly aligned, point to an
    /// initialized `T`, and stay valid and unaliased for `'a`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NullReference`] when `raw` is null.
    #[inline]
    pub unsafe fn from_raw(raw: *mut T) -> RuntimeResult<Self> {
        // SAFETY: upheld by the caller for non-null `raw`; `as_mut` maps null to `None`.
        Self::new(unsafe { raw.as_mut() })
    }

    /// True for the unset state
    #[inline]
    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// Shared access, or `NullReference` when unset
    #[inline]
    pub fn try_get(&self) -> RuntimeResult<&T> {
        self.target.as_deref().ok_or(RuntimeError::NullReference)
    }

    /// Exclusive access, or `NullReference` when unset
    #[inline]
    pub fn try_get_mut(&mut self) -> RuntimeResult<&mut T> {
        self.target.as_deref_mut().ok_or(RuntimeError::NullReference)
    }

    /// The held address; null when unset
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.target
            .as_deref()
            .map_or(std::ptr::null(), |target| target as *const T)
    }

    /// The held address for writes; null when unset
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.target
            .as_deref_mut()
            .map_or(std::ptr::null_mut(), |target| target as *mut T)
    }

    /// Point the wrapper at `target`
    #[inline]
    pub fn set(&mut self, target: &'a mut T) {
        self.target = Some(target);
    }

    /// Move the reference out, leaving the wrapper unset
    #[inline]
    pub fn take(&mut self) -> Option<&'a mut T> {
        self.target.take()
    }

    /// Consume the wrapper, returning the reference
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NullReference`] when unset.
    #[inline]
    pub fn into_inner(self) -> RuntimeResult<&'a mut T> {
        self.target.ok_or(RuntimeError::NullReference)
    }
}

impl<T> Default for Ptr<'_, T> {
    fn default() -> Self {
        Ptr::unset()
    }
}

impl<'a, T> From<&'a mut T> for Ptr<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Ptr::from_ref(target)
    }
}

impl<T> Deref for Ptr<'_, T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        check(self.try_get())
    }
}

impl<T> DerefMut for Ptr<'_, T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        check(self.try_get_mut())
    }
}
