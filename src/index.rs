use std::fmt;
use std::hash::Hash;

pub type DefaultIx = u32;

/// Unsigned integer used to address slots of the node arena.
///
/// # Safety
///
/// `index(new(x))` must equal `x` for every `x <= max().index()`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

macro_rules! index_type {
    ($($ty:ty),*) => {
        $(
            unsafe impl IndexType for $ty {
                #[inline(always)]
                fn new(x: usize) -> Self {
                    x as $ty
                }
                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }
                #[inline(always)]
                fn max() -> Self {
                    <$ty>::MAX
                }
            }
        )*
    };
}

index_type!(u16, u32, u64, usize);

/// Arena slot identifier.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The first index that can no longer be allocated.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
