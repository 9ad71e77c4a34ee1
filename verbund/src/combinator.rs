//! Shareable parser handles and the composition algebra.
use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    error::{SyntaxError, SyntaxErrorKind},
    product::{Concat, Product},
    sum::{Inject, Sum2, Sum3, Sum4, Sum5, Widen},
    text::offset_of,
    Parsed::{self, Fallthrough, Match},
};

type ParseFn<'src, T> = dyn Fn(&'src str) -> Parsed<'src, T> + Send + Sync + 'src;

fn parse_fn<'src, T>(
    parse: impl Fn(&'src str) -> Parsed<'src, T> + Send + Sync + 'src,
) -> Arc<ParseFn<'src, T>> {
    Arc::new(parse)
}

/// A shareable, assignable handle to a parser producing values of type `T`.
///
/// Cloning a `Combinator` does not copy the parser, it creates another handle to the same
/// definition. Every combinator built from a handle, using [`then`](Self::then),
/// [`or`](Self::or), [`either`](Self::either), [`map`](Self::map) or any of the derived
/// combinators, captures the handle and looks up the current definition each time it parses.
///
/// This is what makes recursive grammars possible: a rule is [declared](Self::declare) without a
/// definition, used while building other rules, and [defined](Self::define) afterwards, possibly
/// in terms of itself. Parsing with a handle that was never defined panics.
///
/// The input is a `&'src str` and parsed values may borrow from it.
///
/// All handles are `Send` and `Sync`, so a grammar can be shared between threads once all its
/// rules are defined.
pub struct Combinator<'src, T> {
    definition: Arc<RwLock<Option<Arc<ParseFn<'src, T>>>>>,
}

impl<'src, T> Clone for Combinator<'src, T> {
    fn clone(&self) -> Self {
        Combinator {
            definition: Arc::clone(&self.definition),
        }
    }
}

impl<'src, T> fmt::Debug for Combinator<'src, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defined = self
            .definition
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("Combinator")
            .field("defined", &defined)
            .finish()
    }
}

impl<'src, T> Default for Combinator<'src, T> {
    fn default() -> Self {
        Combinator {
            definition: Arc::new(RwLock::new(None)),
        }
    }
}

impl<'src, T> From<&Combinator<'src, T>> for Combinator<'src, T> {
    fn from(handle: &Combinator<'src, T>) -> Self {
        handle.clone()
    }
}

impl<'src, T: 'src> Combinator<'src, T> {
    /// Creates a combinator from a parser function.
    ///
    /// The function has to follow the parser contract: on a match the remainder must be a suffix
    /// of the passed input.
    pub fn new(parse: impl Fn(&'src str) -> Parsed<'src, T> + Send + Sync + 'src) -> Self {
        Combinator {
            definition: Arc::new(RwLock::new(Some(parse_fn(parse)))),
        }
    }

    /// Creates a handle without a definition.
    ///
    /// The handle can be used to build other combinators right away, but it has to be
    /// [defined](Self::define) before any of them is used for parsing.
    pub fn declare() -> Self {
        Self::default()
    }

    /// Sets the definition of this handle.
    ///
    /// This affects every combinator built from this handle, including those that were built
    /// before the definition was set. The handle parses through `definition`, so later
    /// definitions of that handle are observed as well.
    pub fn define(&self, definition: impl Into<Combinator<'src, T>>) {
        let target = definition.into();
        let parse = parse_fn(move |input| target.parse(input));
        *self
            .definition
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(parse);
    }

    /// Returns whether this handle has a definition.
    pub fn is_defined(&self) -> bool {
        self.definition
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Removes the definition of this handle.
    ///
    /// A rule defined in terms of itself keeps its own definition alive. Resetting one rule of
    /// such a cycle releases the grammar once all other handles are dropped.
    pub fn reset(&self) {
        *self
            .definition
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Runs the parser on `input`.
    ///
    /// # Panics
    ///
    /// Panics if this handle, or any handle it parses through, was declared but never defined.
    #[inline]
    pub fn parse(&self, input: &'src str) -> Parsed<'src, T> {
        let current = self
            .definition
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match current {
            Some(parse) => parse(input),
            None => undefined(),
        }
    }

    /// Runs the parser on `input`, requiring it to consume the whole input.
    pub fn parse_all(&self, input: &'src str) -> Result<T, SyntaxError> {
        match self.parse(input) {
            Match(value, "") => Ok(value),
            Match(_, rest) => Err(SyntaxError::new(
                input,
                offset_of(input, rest),
                SyntaxErrorKind::TrailingInput,
            )),
            Fallthrough => Err(SyntaxError::new(input, 0, SyntaxErrorKind::NoMatch)),
        }
    }

    /// Sequences this parser with `rhs`.
    ///
    /// The resulting parser first runs this parser and then `rhs` on the remaining input. It
    /// matches only if both match and produces the flat product of both results: `rhs` may itself
    /// be a sequence whose values are appended one by one.
    pub fn then<R: Sequence<'src>>(
        &self,
        rhs: &R,
    ) -> Seq<'src, <(T,) as Concat<R::Values>>::Output>
    where
        (T,): Concat<R::Values>,
    {
        sequence(self.values(), rhs.values())
    }

    /// Tries this parser and, if it falls through, `rhs` on the same input.
    ///
    /// Both alternatives produce the same type, so the result is not wrapped in a sum. The first
    /// alternative that matches wins, even if `rhs` would match more input.
    pub fn or(&self, rhs: &Combinator<'src, T>) -> Combinator<'src, T> {
        alternate(self.clone(), rhs.clone(), |value| value, |value| value)
    }

    /// Tries this parser and, if it falls through, `rhs` of a different type on the same input.
    ///
    /// The result records which alternative matched. Only use this when `U` differs from `T`, the
    /// compiler does not reject `a.either(&a)`, which produces a sum with two cases of the same
    /// type. Use [`or`](Self::or) when both alternatives have the same type.
    pub fn either<U: 'src>(&self, rhs: &Combinator<'src, U>) -> Alt<'src, Sum2<T, U>> {
        Alt {
            inner: alternate(self.clone(), rhs.clone(), Sum2::First, Sum2::Second),
        }
    }

    /// Replaces the parsed value with the result of applying `f` to it.
    ///
    /// `f` is only called when the input matched.
    pub fn map<U: 'src>(&self, f: impl Fn(T) -> U + Send + Sync + 'src) -> Combinator<'src, U> {
        let inner = self.clone();
        Combinator::new(move |input| inner.parse(input).map(&f))
    }
}

#[cold]
#[inline(never)]
fn undefined() -> ! {
    panic!("parsed using a combinator that was declared but never defined");
}

/// Parsers that can be sequenced using `then`.
///
/// A [`Combinator`] or an [`Alt`] contributes a single value to a sequence, a [`Seq`] contributes
/// all of its values.
pub trait Sequence<'src> {
    /// The product of values this contributes to a sequence.
    type Values: Product + 'src;

    /// Returns a combinator producing the contributed values.
    fn values(&self) -> Combinator<'src, Self::Values>;
}

impl<'src, T: 'src> Sequence<'src> for Combinator<'src, T> {
    type Values = (T,);

    fn values(&self) -> Combinator<'src, (T,)> {
        self.map(|value| (value,))
    }
}

fn sequence<'src, L, R>(lhs: Combinator<'src, L>, rhs: Combinator<'src, R>) -> Seq<'src, L::Output>
where
    L: Concat<R> + 'src,
    R: Product + 'src,
    L::Output: 'src,
{
    Seq {
        inner: Combinator::new(move |input| {
            lhs.parse(input)
                .and_then(|values, rest| rhs.parse(rest).map(|more| values.concat(more)))
        }),
    }
}

fn alternate<'src, L, R, S>(
    lhs: Combinator<'src, L>,
    rhs: Combinator<'src, R>,
    left: impl Fn(L) -> S + Send + Sync + 'src,
    right: impl Fn(R) -> S + Send + Sync + 'src,
) -> Combinator<'src, S>
where
    L: 'src,
    R: 'src,
    S: 'src,
{
    Combinator::new(move |input| {
        lhs.parse(input)
            .map(&left)
            .or_parse(|| rhs.parse(input).map(&right))
    })
}

/// A combinator producing a flat product of sequentially parsed values.
///
/// Created by [`Combinator::then`]. Sequencing a `Seq` again appends to its product, and
/// [`map`](Seq::map) passes the elements of the product as separate arguments.
///
/// Like [`Combinator`], this is a shareable handle that can be declared and defined later.
pub struct Seq<'src, L> {
    inner: Combinator<'src, L>,
}

impl<'src, L> Clone for Seq<'src, L> {
    fn clone(&self) -> Self {
        Seq {
            inner: self.inner.clone(),
        }
    }
}

impl<'src, L> fmt::Debug for Seq<'src, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seq").field(&self.inner).finish()
    }
}

impl<'src, L> Default for Seq<'src, L> {
    fn default() -> Self {
        Seq {
            inner: Combinator::default(),
        }
    }
}

impl<'src, L> From<Seq<'src, L>> for Combinator<'src, L> {
    fn from(seq: Seq<'src, L>) -> Self {
        seq.inner
    }
}

impl<'src, L: Product + 'src> Seq<'src, L> {
    /// Creates a handle without a definition, see [`Combinator::declare`].
    pub fn declare() -> Self {
        Self::default()
    }

    /// Sets the definition of this handle, see [`Combinator::define`].
    pub fn define(&self, definition: Seq<'src, L>) {
        self.inner.define(definition.inner)
    }

    /// Runs the parser on `input`, producing the product as tuple.
    #[inline]
    pub fn parse(&self, input: &'src str) -> Parsed<'src, L> {
        self.inner.parse(input)
    }

    /// Appends `rhs` to this sequence, see [`Combinator::then`].
    pub fn then<R: Sequence<'src>>(&self, rhs: &R) -> Seq<'src, L::Output>
    where
        L: Concat<R::Values>,
    {
        sequence(self.inner.clone(), rhs.values())
    }

    /// Returns a combinator producing the product as tuple.
    pub fn into_combinator(self) -> Combinator<'src, L> {
        self.inner
    }
}

impl<'src, L: Product + 'src> Sequence<'src> for Seq<'src, L> {
    type Values = L;

    fn values(&self) -> Combinator<'src, L> {
        self.inner.clone()
    }
}

macro_rules! seq_map {
    ($($T:ident $t:ident),+) => {
        impl<'src, $($T: 'src),+> Seq<'src, ($($T,)+)> {
            /// Replaces the parsed product with the result of `f`, which receives the elements of
            /// the product as separate arguments.
            ///
            /// Elements that are not needed can be bound to `_`.
            pub fn map<U: 'src>(
                &self,
                f: impl Fn($($T),+) -> U + Send + Sync + 'src,
            ) -> Combinator<'src, U> {
                self.inner.map(move |($($t,)+)| f($($t),+))
            }
        }
    };
}

seq_map!(A a, B b);
seq_map!(A a, B b, C c);
seq_map!(A a, B b, C c, D d);
seq_map!(A a, B b, C c, D d, E e);
seq_map!(A a, B b, C c, D d, E e, F f);
seq_map!(A a, B b, C c, D d, E e, F f, G g);
seq_map!(A a, B b, C c, D d, E e, F f, G g, H h);

/// A combinator producing a flat sum of alternatively parsed values.
///
/// Created by [`Combinator::either`]. Adding an alternative of a new type using
/// [`either`](Alt::either) widens the sum, adding an alternative of a type that is already
/// present using [`or`](Alt::or) keeps it. [`map`](Alt::map) takes one function per case and
/// calls the one for the alternative that matched.
///
/// Like [`Combinator`], this is a shareable handle that can be declared and defined later.
pub struct Alt<'src, S> {
    inner: Combinator<'src, S>,
}

impl<'src, S> Clone for Alt<'src, S> {
    fn clone(&self) -> Self {
        Alt {
            inner: self.inner.clone(),
        }
    }
}

impl<'src, S> fmt::Debug for Alt<'src, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alt").field(&self.inner).finish()
    }
}

impl<'src, S> Default for Alt<'src, S> {
    fn default() -> Self {
        Alt {
            inner: Combinator::default(),
        }
    }
}

impl<'src, S> From<Alt<'src, S>> for Combinator<'src, S> {
    fn from(alt: Alt<'src, S>) -> Self {
        alt.inner
    }
}

impl<'src, S: 'src> Alt<'src, S> {
    /// Creates a handle without a definition, see [`Combinator::declare`].
    pub fn declare() -> Self {
        Self::default()
    }

    /// Sets the definition of this handle, see [`Combinator::define`].
    pub fn define(&self, definition: Alt<'src, S>) {
        self.inner.define(definition.inner)
    }

    /// Runs the parser on `input`, producing the sum.
    #[inline]
    pub fn parse(&self, input: &'src str) -> Parsed<'src, S> {
        self.inner.parse(input)
    }

    /// Sequences this parser with `rhs`, see [`Combinator::then`].
    pub fn then<R: Sequence<'src>>(
        &self,
        rhs: &R,
    ) -> Seq<'src, <(S,) as Concat<R::Values>>::Output>
    where
        (S,): Concat<R::Values>,
    {
        sequence(self.values(), rhs.values())
    }

    /// Adds an alternative of a type that is not yet part of the sum.
    ///
    /// Passing a type that already is a case of the sum is not rejected by the compiler but
    /// produces a sum with a repeated case. Use [`or`](Alt::or) for such alternatives, which
    /// places the value into the existing case.
    pub fn either<U: 'src>(&self, rhs: &Combinator<'src, U>) -> Alt<'src, S::Output>
    where
        S: Widen<U>,
        S::Output: 'src,
    {
        Alt {
            inner: alternate(
                self.inner.clone(),
                rhs.clone(),
                <S as Widen<U>>::widen,
                <S as Widen<U>>::extend,
            ),
        }
    }

    /// Adds an alternative of a type that is already part of the sum.
    ///
    /// A value parsed by `rhs` is placed into the existing case of type `V`, so the type of the
    /// sum does not change. The case marker `K` is inferred.
    pub fn or<V: 'src, K: 'src>(&self, rhs: &Combinator<'src, V>) -> Alt<'src, S>
    where
        S: Inject<V, K>,
    {
        Alt {
            inner: alternate(
                self.inner.clone(),
                rhs.clone(),
                |sum| sum,
                <S as Inject<V, K>>::inject,
            ),
        }
    }

    /// Returns a combinator producing the sum.
    pub fn into_combinator(self) -> Combinator<'src, S> {
        self.inner
    }
}

impl<'src, S: 'src> Sequence<'src> for Alt<'src, S> {
    type Values = (S,);

    fn values(&self) -> Combinator<'src, (S,)> {
        self.inner.map(|sum| (sum,))
    }
}

macro_rules! alt_map {
    ($sum:ident [$($T:ident $variant:ident $F:ident $f:ident),+]) => {
        impl<'src, $($T: 'src),+> Alt<'src, $sum<$($T),+>> {
            /// Replaces the parsed sum with the result of the function for the alternative that
            /// matched.
            ///
            /// The functions are passed in the order the alternatives were added.
            pub fn map<U: 'src, $($F),+>(&self, $($f: $F),+) -> Combinator<'src, U>
            where
                $($F: Fn($T) -> U + Send + Sync + 'src,)+
            {
                self.inner.map(move |sum| match sum {
                    $($sum::$variant(value) => $f(value),)+
                })
            }
        }
    };
}

alt_map!(Sum2 [A First FA fa, B Second FB fb]);
alt_map!(Sum3 [A First FA fa, B Second FB fb, C Third FC fc]);
alt_map!(Sum4 [A First FA fa, B Second FB fb, C Third FC fc, D Fourth FD fd]);
alt_map!(Sum5 [A First FA fa, B Second FB fb, C Third FC fc, D Fourth FD fd, E Fifth FE fe]);
