#![cfg(test)]
#![allow(unused)]

use std::cell::RefCell;
use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::Rc;

macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

pub(crate) use assert_panics;

/// Increments the shared counter every time an instance is dropped, including clones.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A keyed record where only `key` takes part in ordering, so that equivalent records can still
/// be told apart by `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: u32,
    pub payload: &'static str,
}

impl Record {
    pub const fn new(key: u32, payload: &'static str) -> Record {
        Record { key, payload }
    }
}

pub fn by_key(a: &Record, b: &Record) -> Ordering {
    a.key.cmp(&b.key)
}

/// A seeded xorshift generator, so that randomised tests replay the same sequence. The seed must
/// be nonzero.
pub struct XorShift64(u64);

impl XorShift64 {
    pub const fn new(seed: u64) -> XorShift64 {
        XorShift64(seed)
    }

    /// Returns a value in `0..n`.
    pub fn below(&mut self, n: usize) -> usize {
        let mut x = self.0;
        x ^= x << 7;
        x ^= x >> 9;
        x ^= x << 8;
        self.0 = x;
        (x % n as u64) as usize
    }
}
