pub struct Chunks<I: Iterator> {
    source: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    pub fn new(source: I, size: usize) -> Chunks<I> {
        Self { source, size }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.size == 0 {
            return None;
        }
        let buf: Vec<I::Item> = self.source.by_ref().take(self.size).collect();
        if buf.len() < self.size { None } else { Some(buf) }
    }
}
