//! Wide strings.
//!
//! This module provides the [`UString`] type, the wide-unit (`char`)
//! counterpart of [`ByteString`](crate::bytes::ByteString), as well as the
//! associated helper types.
//!
//! Both string widths delegate all ownership logic to the same raw core;
//! converting between them is always an explicit UTF-8 transcoding copy and
//! never a buffer-sharing operation, since the unit widths differ.

use core::borrow::Borrow;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut, RangeBounds};
use core::str::Utf8Error;

use crate::alloc::fmt;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::backend::Backend;
use crate::bytes::ByteString;
use crate::common::{panic_display, simplify_range, RangeError};
use crate::raw::Raw;
use crate::view::UStringRef;

mod cmp;
mod convert;

#[cfg(feature = "serde")]
pub mod serde;


/// Maximal unit count of an inline [`UString`].
const INLINE_CAPACITY: usize = 8;

/// Copy-on-write wide string, i.e. cheaply clonable and sliceable sequence
/// of `char` code units.
///
/// # Examples
///
/// You can create a `UString` from a [`&str`][str] (transcoding) or from
/// wide units directly:
///
/// ```
/// # use plinth::UString;
/// let hello = UString::from("Hello");
/// let hi = UString::borrowed(&['h', 'i']);
/// ```
///
/// # Representations and the write path
///
/// Exactly like `ByteString`, a `UString` is either a persistent borrow, an
/// inline sequence of up to [`UString::inline_capacity()`] units, or a
/// shared heap-allocated sequence. Clones are O(1); every mutating
/// operation [detaches](Self::detach) first.
///
/// Unlike `&str` indexing, every index here counts whole `char` units, so
/// indexed access and slicing are total over `0..len()`.
pub struct UString<'borrow, B: Backend>(pub(crate) Raw<'borrow, char, B, INLINE_CAPACITY>);

impl<'borrow, B: Backend> UString<'borrow, B> {
    /// Creates an empty `UString`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::new();
    /// assert!(s.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Raw::empty())
    }

    /// Creates a new `UString` with at least the given capacity, in units.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Raw::with_capacity(capacity))
    }

    /// Creates a new `UString` from a borrowed unit slice without copying.
    ///
    /// The data is *persistent*: it is never freed and a first mutation
    /// copies it even if no other handle exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// static UNITS: [char; 2] = ['h', 'i'];
    /// let s = UString::borrowed(&UNITS);
    /// assert!(s.is_borrowed());
    /// assert_eq!(s.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn borrowed(units: &'borrow [char]) -> Self {
        Self(Raw::borrowed(units))
    }

    /// Decodes a UTF-8 byte sequence into a new `UString`.
    ///
    /// This is an explicit transcoding copy; the buffer is never shared
    /// with the source, whose units are half the width.
    ///
    /// # Errors
    ///
    /// Returns a [`Utf8Error`] if the input is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from_utf8(b"h\xC3\xA9llo").unwrap();
    /// assert_eq!(s, "héllo");
    /// assert!(UString::from_utf8(b"\xFF").is_err());
    /// ```
    #[inline]
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, Utf8Error> {
        let text = core::str::from_utf8(bytes)?;
        Ok(Self::from(text))
    }

    /// Decodes a UTF-8 byte sequence, replacing invalid sequences with
    /// U+FFFD REPLACEMENT CHARACTER.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from_utf8_lossy(b"ab\xFF");
    /// assert_eq!(s, "ab\u{FFFD}");
    /// ```
    #[inline]
    #[must_use]
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self::from(&*String::from_utf8_lossy(bytes))
    }

    /// Encodes this `UString` into a UTF-8 [`ByteString`].
    ///
    /// This is an explicit transcoding copy; the result never shares this
    /// string's buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from("héllo");
    /// assert_eq!(s.to_utf8(), b"h\xC3\xA9llo");
    /// ```
    #[must_use]
    pub fn to_utf8(&self) -> ByteString<'static, B> {
        let units = self.as_units();
        let mut vec = Vec::with_capacity(units.iter().map(|c| c.len_utf8()).sum());
        let mut buf = [0_u8; 4];
        for c in units {
            vec.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        ByteString::from(vec)
    }

    /// Returns `true` if this `UString` uses the inline representation.
    #[inline]
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.0.is_inline()
    }

    /// Returns `true` if this `UString` is a borrow of persistent data.
    #[inline]
    #[must_use]
    pub const fn is_borrowed(&self) -> bool {
        self.0.is_borrowed()
    }

    /// Returns `true` if this `UString` is a shared heap-allocated
    /// sequence.
    #[inline]
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.0.is_allocated()
    }

    /// Returns `true` if this handle owns its buffer exclusively, that is,
    /// if [`detach`](Self::detach) would be a no-op.
    #[inline]
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.0.is_detached()
    }

    /// Returns `true` iff both handles resolve to the same underlying
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let a = UString::from("a long enough wide string");
    /// let b = a.clone();
    /// assert!(a.is_shared_with(&b));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_shared_with(&self, other: &Self) -> bool {
        self.0.is_shared_with(&other.0)
    }

    /// Makes the underlying data exclusively owned, copying if it is shared
    /// or persistent.
    ///
    /// Calling it twice in a row never reallocates.
    #[inline]
    pub fn detach(&mut self) {
        self.0.detach();
    }

    /// Returns the length of this `UString` in units.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// // three units, five UTF-8 bytes
    /// assert_eq!(UString::from("héé").len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this `UString` has a length of zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the capacity of the current buffer, in units.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns the maximal length of an inline `UString`, in units.
    #[inline]
    #[must_use]
    pub const fn inline_capacity() -> usize {
        INLINE_CAPACITY
    }

    /// Extracts the unit slice of the entire `UString`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from("hi");
    /// assert_eq!(s.as_units(), &['h', 'i']);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_units(&self) -> &[char] {
        self.0.as_slice()
    }

    /// Returns a raw pointer to the first unit.
    ///
    /// Useful to observe buffer identity, e.g. in tests.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const char {
        self.0.as_ptr()
    }

    /// Returns the unit at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_units().get(index).copied()
    }

    /// Returns the unit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// assert_eq!(UString::from("héllo").at(1), 'é');
    /// ```
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> char {
        self.as_units()[index]
    }

    /// Returns a mutable unit slice of the entire `UString`, detaching
    /// first.
    #[inline]
    #[must_use]
    pub fn to_mut_slice(&mut self) -> &mut [char] {
        self.0.to_mut_slice()
    }

    /// Appends all units of the slice to this `UString`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let mut s = UString::from("ab");
    /// s.push_slice(&['c', 'd']);
    /// assert_eq!(s, "abcd");
    /// ```
    #[inline]
    pub fn push_slice(&mut self, addition: &[char]) {
        self.0.push_slice(addition);
    }

    /// Appends a unit to this `UString`.
    #[inline]
    pub fn push(&mut self, value: char) {
        self.0.push_slice(&[value]);
    }

    /// Appends a string slice, transcoding it to wide units.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let mut s = UString::from("hé");
    /// s.push_str("llo");
    /// assert_eq!(s, "héllo");
    /// ```
    #[inline]
    pub fn push_str(&mut self, addition: &str) {
        for c in addition.chars() {
            self.push(c);
        }
    }

    /// Inserts all units of the slice at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn insert_slice(&mut self, index: usize, addition: &[char]) {
        self.0.insert_slice(index, addition);
    }

    /// Inserts a unit at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    #[inline]
    pub fn insert(&mut self, index: usize, value: char) {
        self.0.insert_slice(index, &[value]);
    }

    /// Shortens this `UString`, keeping the first `new_len` units.
    ///
    /// No-op if `new_len` is not below the current length.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.0.truncate(new_len);
    }

    /// Empties this `UString`.
    #[inline]
    pub fn clear(&mut self) {
        self.0.truncate(0);
    }

    /// Extracts an owning sub-string.
    ///
    /// Shares the heap buffer when the source is allocated and the range is
    /// too long to go inline; never copies borrowed data.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    #[inline]
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        self.try_slice(range).unwrap_or_else(panic_display)
    }

    /// Extracts an owning sub-string, checking the range first.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range is invalid.
    #[inline]
    pub fn try_slice(&self, range: impl RangeBounds<usize>) -> Result<Self, RangeError> {
        let range = simplify_range(range, self.len())?;
        Ok(Self(self.0.slice(range)))
    }

    /// Extracts an owning sub-string of `length` units starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the window falls out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from("abcdef");
    /// assert_eq!(s.mid(1, 3), "bcd");
    /// assert_eq!(s.mid(0, s.len()), s);
    /// ```
    #[inline]
    #[must_use]
    pub fn mid(&self, start: usize, length: usize) -> Self {
        self.slice(start..start + length)
    }

    /// Extracts the first `length` units as an owning sub-string.
    ///
    /// # Panics
    ///
    /// Panics if `length` is greater than the length.
    #[inline]
    #[must_use]
    pub fn left(&self, length: usize) -> Self {
        self.slice(..length)
    }

    /// Extracts the last `length` units as an owning sub-string.
    ///
    /// # Panics
    ///
    /// Panics if `length` is greater than the length.
    #[inline]
    #[must_use]
    pub fn right(&self, length: usize) -> Self {
        self.slice(self.len() - length..)
    }

    /// Returns a reference to a window of this `UString`.
    ///
    /// The reference borrows this handle: as long as it lives, the string
    /// cannot be mutated, so the window can never go stale.
    ///
    /// # Panics
    ///
    /// Panics if the window falls out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// let s = UString::from("abcdef");
    /// let r = s.mid_ref(1, 3);
    /// assert_eq!(r.as_units(), &['b', 'c', 'd']);
    /// assert_eq!(r.to_owned(), s.mid(1, 3));
    /// ```
    #[inline]
    #[must_use]
    pub fn mid_ref(&self, start: usize, length: usize) -> UStringRef<'_, 'borrow, B> {
        UStringRef::new(self, start..start + length).unwrap_or_else(panic_display)
    }

    /// Returns a reference to the first `length` units.
    ///
    /// # Panics
    ///
    /// Panics if `length` is greater than the length.
    #[inline]
    #[must_use]
    pub fn left_ref(&self, length: usize) -> UStringRef<'_, 'borrow, B> {
        self.mid_ref(0, length)
    }

    /// Returns a reference to the last `length` units.
    ///
    /// # Panics
    ///
    /// Panics if `length` is greater than the length.
    #[inline]
    #[must_use]
    pub fn right_ref(&self, length: usize) -> UStringRef<'_, 'borrow, B> {
        self.mid_ref(self.len() - length, length)
    }

    /// Makes the data owned, copying it if the data is actually borrowed.
    #[must_use]
    pub fn into_owned(self) -> UString<'static, B> {
        UString(self.0.into_owned())
    }

    /// Converts `self` into the borrowed unit slice if this `UString` is
    /// backed by one.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if this `UString` is not a borrow.
    #[inline]
    pub fn into_borrowed(self) -> Result<&'borrow [char], Self> {
        self.0.into_borrowed().map_err(Self)
    }

    /// Converts `self` into a unit vector, reusing the heap allocation when
    /// this handle holds it exclusively.
    #[inline]
    #[must_use]
    pub fn into_vec(mut self) -> Vec<char> {
        self.0.take_vec()
    }

    /// Takes the value, leaving an empty `UString` in its place.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Returns a new `UString` lowercased according to Unicode simple case
    /// mapping plus the special casings of [`char::to_lowercase`].
    ///
    /// The length may change: some characters lowercase to several units.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// assert_eq!(UString::from("HÉLLO").to_lowercase(), "héllo");
    /// ```
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        self.as_units()
            .iter()
            .flat_map(|c| c.to_lowercase())
            .collect()
    }

    /// Returns a new `UString` uppercased according to Unicode case
    /// mapping.
    ///
    /// The length may change: e.g. `'ß'` uppercases to `"SS"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::UString;
    /// assert_eq!(UString::from("straße").to_uppercase(), "STRASSE");
    /// ```
    #[must_use]
    pub fn to_uppercase(&self) -> Self {
        self.as_units()
            .iter()
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

impl<B: Backend> Clone for UString<'_, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<B: Backend> Default for UString<'_, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> core::ops::Deref for UString<'_, B> {
    type Target = [char];

    #[inline]
    fn deref(&self) -> &[char] {
        self.as_units()
    }
}

impl<B: Backend> fmt::Display for UString<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        for c in self.as_units() {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

impl<B: Backend> fmt::Debug for UString<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char('"')?;
        for c in self.as_units() {
            for escaped in c.escape_debug() {
                f.write_char(escaped)?;
            }
        }
        f.write_char('"')
    }
}

impl<B: Backend> Hash for UString<'_, B> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_units().hash(state);
    }
}

impl<B: Backend> Borrow<[char]> for UString<'_, B> {
    #[inline]
    fn borrow(&self) -> &[char] {
        self.as_units()
    }
}

impl<B: Backend> Index<usize> for UString<'_, B> {
    type Output = char;

    #[inline]
    fn index(&self, index: usize) -> &char {
        &self.as_units()[index]
    }
}

impl<B: Backend> IndexMut<usize> for UString<'_, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut char {
        &mut self.to_mut_slice()[index]
    }
}
