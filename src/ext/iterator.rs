use itertools::Itertools;

pub struct ChunkByCount<I: Iterator> {
    #[allow(clippy::type_complexity)]
    inner: itertools::structs::ChunkBy<I::Item, I, fn(&I::Item) -> I::Item>,
}

impl<I> Iterator for ChunkByCount<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .into_iter()
            .next()
            .map(|(key, chunk)| (key, chunk.count()))
    }
}

pub trait IteratorExt: Iterator {
    fn chunk_by_count(self) -> ChunkByCount<Self>
    where
        Self: Sized;
}

impl<I> IteratorExt for I
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    fn chunk_by_count(self) -> ChunkByCount<Self>
    where
        Self: Sized,
    {
        ChunkByCount {
            inner: self.chunk_by(|i| i.clone()),
        }
    }
}
