//! Flat products of sequentially parsed values.
//!
//! Sequencing parsers keeps every parsed value in a tuple. Adding another parser to a sequence
//! appends to that tuple instead of nesting it, so `a.then(&b).then(&c)` produces `(A, B, C)` and
//! never `((A, B), C)`. Tuples with up to eight elements are supported.

/// A tuple of parsed values, produced by sequencing.
pub trait Product: Sized {
    /// Number of values in the product.
    const ARITY: usize;
}

/// Concatenation of two products, keeping the result flat.
pub trait Concat<R: Product>: Product {
    /// The product containing the values of `Self` followed by the values of `R`.
    type Output: Product;

    /// Appends the values of `rhs` to the values of `self`.
    fn concat(self, rhs: R) -> Self::Output;
}

macro_rules! impl_product {
    ($($T:ident)+) => {
        impl<$($T),+> Product for ($($T,)+) {
            const ARITY: usize = [$(stringify!($T)),+].len();
        }
    };
}

impl_product!(A);
impl_product!(A B);
impl_product!(A B C);
impl_product!(A B C D);
impl_product!(A B C D E);
impl_product!(A B C D E F);
impl_product!(A B C D E F G);
impl_product!(A B C D E F G H);

macro_rules! impl_concat {
    ([$($L:ident $l:ident)+] [$($R:ident $r:ident)+]) => {
        impl<$($L,)+ $($R),+> Concat<($($R,)+)> for ($($L,)+) {
            type Output = ($($L,)+ $($R,)+);

            #[inline]
            fn concat(self, rhs: ($($R,)+)) -> Self::Output {
                let ($($l,)+) = self;
                let ($($r,)+) = rhs;
                ($($l,)+ $($r,)+)
            }
        }
    };
}

impl_concat!([A a] [S s]);
impl_concat!([A a] [S s T t]);
impl_concat!([A a] [S s T t U u]);
impl_concat!([A a] [S s T t U u V v]);
impl_concat!([A a] [S s T t U u V v W w]);
impl_concat!([A a] [S s T t U u V v W w X x]);
impl_concat!([A a] [S s T t U u V v W w X x Y y]);
impl_concat!([A a B b] [S s]);
impl_concat!([A a B b] [S s T t]);
impl_concat!([A a B b] [S s T t U u]);
impl_concat!([A a B b] [S s T t U u V v]);
impl_concat!([A a B b] [S s T t U u V v W w]);
impl_concat!([A a B b] [S s T t U u V v W w X x]);
impl_concat!([A a B b C c] [S s]);
impl_concat!([A a B b C c] [S s T t]);
impl_concat!([A a B b C c] [S s T t U u]);
impl_concat!([A a B b C c] [S s T t U u V v]);
impl_concat!([A a B b C c] [S s T t U u V v W w]);
impl_concat!([A a B b C c D d] [S s]);
impl_concat!([A a B b C c D d] [S s T t]);
impl_concat!([A a B b C c D d] [S s T t U u]);
impl_concat!([A a B b C c D d] [S s T t U u V v]);
impl_concat!([A a B b C c D d E e] [S s]);
impl_concat!([A a B b C c D d E e] [S s T t]);
impl_concat!([A a B b C c D d E e] [S s T t U u]);
impl_concat!([A a B b C c D d E e F f] [S s]);
impl_concat!([A a B b C c D d E e F f] [S s T t]);
impl_concat!([A a B b C c D d E e F f G g] [S s]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_concatenation() {
        let pair: (u8, char) = (1,).concat(('a',));
        assert_eq!(pair, (1, 'a'));

        let triple: (u8, char, &str) = pair.concat(("b",));
        assert_eq!(triple, (1, 'a', "b"));

        let six: (u8, char, &str, u8, char, &str) = triple.concat(triple);
        assert_eq!(six, (1, 'a', "b", 1, 'a', "b"));
    }

    #[test]
    fn arity() {
        assert_eq!(<(u8,)>::ARITY, 1);
        assert_eq!(<(u8, u8, u8)>::ARITY, 3);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8)>::ARITY, 8);
        assert_eq!(<<(u8, u8) as Concat<(u8, u8, u8)>>::Output as Product>::ARITY, 5);
    }
}
