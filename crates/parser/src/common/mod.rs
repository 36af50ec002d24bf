pub(crate) type Span = std::ops::Range<usize>;
pub(crate) type Spanned<T> = (T, Span);
