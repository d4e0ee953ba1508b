use std::collections::VecDeque;

use rand::{Rng, RngCore};

/// Source of the "pick one from a list" decisions made during generation.
pub trait Chooser {
    /// Index into a list of `len` items. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Uniform choices drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R> {
    rng: R,
}

impl<R: RngCore> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> Chooser for RngChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices.
///
/// Each index is reduced modulo the list length; once the script runs out
/// every choice is the first item.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of choices made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().map_or(0, |index| index % len)
    }
}

/// Pick one item, `None` for an empty list.
pub fn pick<'a, T, C>(chooser: &mut C, items: &'a [T]) -> Option<&'a T>
where
    C: Chooser + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(chooser.choose_index(items.len()))
}
