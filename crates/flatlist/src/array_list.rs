use core::{
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use std::alloc::{Layout, alloc, dealloc};

use crate::{
    error::ListError,
    growth::{INITIAL_CAPACITY, next_capacity},
};

use ListError::{AllocFailed, Empty, IndexOutOfBounds, ZeroSizedElement};

/// Growable contiguous list with explicit, fallible allocation.
///
/// Elements occupy one exclusively owned heap buffer; slots `[0, len)`
/// hold live values in insertion order and slots `[len, capacity)` are
/// uninitialized and never read. Creation allocates
/// [`INITIAL_CAPACITY`] slots up front, growth multiplies capacity by
/// 1.5 (with a `+1` floor so small capacities still grow), and no
/// operation ever shrinks the buffer.
///
/// Everything that can fail returns a [`ListError`]; a failed mutation
/// leaves the list exactly as it was before the call.
pub struct ArrayList<T> {
    data: NonNull<T>,
    capacity: usize,
    len: usize,
}

fn allocate<T>(count: usize) -> Result<NonNull<T>, ListError> {
    if size_of::<T>() == 0 {
        return Err(ZeroSizedElement)
    }
    let size = size_of::<T>()
        .checked_mul(count)
        .ok_or(AllocFailed { new_capacity: count })?;
    if size == 0 {
        return Err(AllocFailed { new_capacity: count })
    }
    let layout = Layout::from_size_align(size, align_of::<T>())
        .map_err(|_| AllocFailed { new_capacity: count })?;
    let ptr = unsafe { alloc(layout) };
    NonNull::new(ptr.cast::<T>()).ok_or(AllocFailed { new_capacity: count })
}

// Safety: `ptr` must come from `allocate::<T>(count)` with the same `count`.
unsafe fn free<T>(ptr: NonNull<T>, count: usize) {
    let size = size_of::<T>() * count;
    let layout = match Layout::from_size_align(size, align_of::<T>()) {
        Ok(l) => l,
        Err(_) => return,
    };
    unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) }
}

impl<T> ArrayList<T> {

    /// Creates an empty list with [`INITIAL_CAPACITY`] slots allocated.
    ///
    /// Fails with `AllocFailed` if the allocation cannot be satisfied
    /// and `ZeroSizedElement` if `T` has size zero.
    pub fn new() -> Result<Self, ListError> {
        let data = allocate::<T>(INITIAL_CAPACITY)?;
        Ok(Self {
            data,
            capacity: INITIAL_CAPACITY,
            len: 0,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Borrows the element at `index`.
    ///
    /// An empty list reports `Empty` for every index, including 0; a
    /// non-empty list reports `IndexOutOfBounds` for `index >= len`.
    /// The same ordering holds for every read, write, and removal below.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    pub fn first(&self) -> Result<&T, ListError> {
        self.get(0)
    }

    pub fn last(&self) -> Result<&T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        self.get(self.len - 1)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// Length and capacity are unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).replace(value) })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Grows first when full; a failed growth
    /// fails the whole call and leaves the list untouched. O(len − index),
    /// amortized O(1) for appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        if self.len == self.capacity {
            self.grow(next_capacity(self.capacity))?
        }
        unsafe {
            let ptr = self.data.add(index);
            ptr.copy_to(ptr.add(1), self.len - index);
            ptr.write(value);
        }
        self.len += 1;
        Ok(())
    }

    #[inline(always)]
    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        self.insert(0, value)
    }

    #[inline(always)]
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.len, value)
    }

    /// Removes and returns the element at `index`, shifting
    /// `(index, len)` one slot left. Capacity never shrinks.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        let value = unsafe {
            let ptr = self.data.add(index);
            let value = ptr.read();
            ptr.add(1).copy_to(ptr, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.len == 0 {
            return Err(Empty)
        }
        self.remove(self.len - 1)
    }

    /// Drops every element. The buffer and its capacity are retained.
    pub fn clear(&mut self) {
        let len = self.len;
        // len goes to 0 first so a panicking element drop leaks the
        // tail instead of double-dropping it.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), len));
        }
    }

    /// Duplicates the list, cloning every element into a fresh buffer
    /// of the same capacity.
    pub fn try_clone(&self) -> Result<Self, ListError>
        where
            T: Clone
    {
        let data = allocate::<T>(self.capacity)?;
        let mut clone = Self {
            data,
            capacity: self.capacity,
            len: 0,
        };
        for value in self.as_slice() {
            unsafe { clone.data.add(clone.len).write(value.clone()) };
            clone.len += 1;
        }
        Ok(clone)
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // Reallocates to `new_capacity`, preserving the live elements.
    // On failure the original buffer and state are untouched.
    fn grow(&mut self, new_capacity: usize) -> Result<(), ListError> {
        debug_assert!(new_capacity > self.capacity);
        let new_data = allocate::<T>(new_capacity)?;
        unsafe {
            self.data.copy_to_nonoverlapping(new_data, self.len);
            free(self.data, self.capacity);
        }
        self.data = new_data;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Drop for ArrayList<T> {

    fn drop(&mut self) {
        self.clear();
        unsafe { free(self.data, self.capacity) }
    }
}

impl<T> Index<usize> for ArrayList<T> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Deref for ArrayList<T> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayList<T> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'list, T> IntoIterator for &'list ArrayList<T> {

    type Item = &'list T;
    type IntoIter = slice::Iter<'list, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'list, T> IntoIterator for &'list mut ArrayList<T> {

    type Item = &'list mut T;
    type IntoIter = slice::IterMut<'list, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {

    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ArrayList<T> {

    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ArrayList<T> {

    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}
