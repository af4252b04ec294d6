use std::ops::Mul;

pub struct Scale<I: Iterator, S> {
    source: I,
    scalar: S,
}

impl<I: Iterator, S> Scale<I, S> {
    pub fn new(source: I, scalar: S) -> Scale<I, S> {
        Self { source, scalar }
    }
}

impl<I, S> Iterator for Scale<I, S>
where
    I: Iterator,
    I::Item: Mul<S, Output = I::Item>,
    S: Copy,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        Some(self.source.next()? * self.scalar)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
