//! Flat sums of alternatively parsed values.
//!
//! Alternating parsers of different types produces one of the `SumN` enums, where exactly one
//! variant holds the value of the alternative that matched. Sums are kept flat and free of
//! duplicates:
//!
//! * Adding an alternative of a new type [widens][Widen] `Sum2<A, B>` to `Sum3<A, B, C>`, it
//!   does not nest the sum in another sum.
//! * Adding an alternative of a type that is already present [injects][Inject] into the existing
//!   variant, so the sum type stays unchanged.
//! * Alternating two parsers of the same type does not produce a sum at all, see
//!   [`Combinator::or`][crate::Combinator::or].
//!
//! Up to five alternatives of distinct types are supported.

/// Marks the first case of a sum, used to select an [`Inject`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct Case0;
/// Marks the second case of a sum.
#[derive(Debug, Clone, Copy)]
pub struct Case1;
/// Marks the third case of a sum.
#[derive(Debug, Clone, Copy)]
pub struct Case2;
/// Marks the fourth case of a sum.
#[derive(Debug, Clone, Copy)]
pub struct Case3;
/// Marks the fifth case of a sum.
#[derive(Debug, Clone, Copy)]
pub struct Case4;

/// Extends a sum by an alternative of a new type.
pub trait Widen<T> {
    /// The sum with `T` as additional last case.
    type Output;

    /// Converts a value of this sum into the wider sum, keeping its case.
    fn widen(self) -> Self::Output;

    /// Creates a value of the wider sum holding `value` in the new case.
    fn extend(value: T) -> Self::Output;
}

/// Places a value into the case of a sum that has type `T`.
///
/// The `K` parameter is one of the [`Case0`]…[`Case4`] markers. It is inferred by the compiler,
/// as there is exactly one case of type `T` in a sum built by alternation.
pub trait Inject<T, K> {
    /// Creates a sum holding `value` in the case of type `T`.
    fn inject(value: T) -> Self;
}

macro_rules! sum {
    (@inject $sum:ident $generics:tt $($T:ident $variant:ident $case:ident),+) => {
        $(sum!(@inject_one $sum $generics $T $variant $case);)+
    };
    (@inject_one $sum:ident [$($G:ident),+] $T:ident $variant:ident $case:ident) => {
        impl<$($G),+> Inject<$T, $case> for $sum<$($G),+> {
            #[inline]
            fn inject(value: $T) -> Self {
                $sum::$variant(value)
            }
        }
    };
    ($(#[$attr:meta])* $sum:ident [$($T:ident $variant:ident $case:ident),+]) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $sum<$($T),+> {
            $(
                #[allow(missing_docs)]
                $variant($T),
            )+
        }

        sum!(@inject $sum [$($T),+] $($T $variant $case),+);
    };
}

sum! {
    /// Result of two alternatives.
    Sum2 [A First Case0, B Second Case1]
}
sum! {
    /// Result of three alternatives.
    Sum3 [A First Case0, B Second Case1, C Third Case2]
}
sum! {
    /// Result of four alternatives.
    Sum4 [A First Case0, B Second Case1, C Third Case2, D Fourth Case3]
}
sum! {
    /// Result of five alternatives.
    Sum5 [A First Case0, B Second Case1, C Third Case2, D Fourth Case3, E Fifth Case4]
}

macro_rules! widen {
    ($sum:ident [$($T:ident $variant:ident),+] => $wider:ident $New:ident $new_variant:ident) => {
        impl<$($T,)+ $New> Widen<$New> for $sum<$($T),+> {
            type Output = $wider<$($T,)+ $New>;

            #[inline]
            fn widen(self) -> Self::Output {
                match self {
                    $($sum::$variant(value) => $wider::$variant(value),)+
                }
            }

            #[inline]
            fn extend(value: $New) -> Self::Output {
                $wider::$new_variant(value)
            }
        }
    };
}

widen!(Sum2 [A First, B Second] => Sum3 C Third);
widen!(Sum3 [A First, B Second, C Third] => Sum4 D Fourth);
widen!(Sum4 [A First, B Second, C Third, D Fourth] => Sum5 E Fifth);

#[cfg(test)]
mod tests {
    use super::*;

    fn inject<S: Inject<T, K>, T, K>(value: T) -> S {
        S::inject(value)
    }

    #[test]
    fn inject_selects_case_by_type() {
        let sum: Sum3<u8, char, &str> = inject('x');
        assert_eq!(sum, Sum3::Second('x'));
        let sum: Sum3<u8, char, &str> = inject("x");
        assert_eq!(sum, Sum3::Third("x"));
    }

    #[test]
    fn widen_keeps_case() {
        let sum: Sum2<u8, char> = Sum2::Second('x');
        assert_eq!(sum.widen(), Sum3::<u8, char, bool>::Second('x'));
        assert_eq!(
            <Sum2<u8, char> as Widen<bool>>::extend(true),
            Sum3::Third(true)
        );
        let sum: Sum4<u8, char, bool, i32> = Sum3::First(1).widen();
        assert_eq!(sum.widen(), Sum5::<u8, char, bool, i32, ()>::First(1));
    }
}
