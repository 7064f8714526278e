#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use critter::animation::CompletionHook;

/// Returns a completion hook plus a shared counter of how many times it fired.
pub fn counting_hook() -> (CompletionHook, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let inner = Rc::clone(&fired);
    (Box::new(move || inner.set(inner.get() + 1)), fired)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
