use crate::integer::Integer;
use crate::monoid::{Commutative, Group, Idempotent, Monoid};

macro_rules! scalar_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name<T>(pub T);

        impl<T: Copy> $name<T> {
            #[inline(always)]
            pub fn val(&self) -> T {
                self.0
            }
        }

        impl<T: Integer> Default for $name<T> {
            fn default() -> Self {
                <Self as Monoid>::identity()
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }
    };
}

scalar_wrapper!(
    /// Wrapping `+`. Identity `0`.
    Addition
);
scalar_wrapper!(
    /// `min`. Identity `T::MAX`.
    Minimum
);
scalar_wrapper!(
    /// `max`. Identity `T::MIN`.
    Maximum
);
scalar_wrapper!(
    /// `^`. Identity `0`.
    BitXor
);
scalar_wrapper!(
    /// `&`. Identity: all bits set.
    BitAnd
);
scalar_wrapper!(
    /// `|`. Identity `0`.
    BitOr
);

impl<T: Integer> Monoid for Addition<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(T::ZERO)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<T: Integer> Commutative for Addition<T> {}

impl<T: Integer> Group for Addition<T> {
    #[inline(always)]
    fn inverse(&self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl<T: Integer> Monoid for Minimum<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(T::MAX)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0.min(rhs.0))
    }
}

impl<T: Integer> Commutative for Minimum<T> {}
impl<T: Integer> Idempotent for Minimum<T> {}

impl<T: Integer> Monoid for Maximum<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(T::MIN)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0.max(rhs.0))
    }
}

impl<T: Integer> Commutative for Maximum<T> {}
impl<T: Integer> Idempotent for Maximum<T> {}

impl<T: Integer> Monoid for BitXor<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(T::ZERO)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<T: Integer> Commutative for BitXor<T> {}

impl<T: Integer> Group for BitXor<T> {
    #[inline(always)]
    fn inverse(&self) -> Self {
        *self
    }
}

impl<T: Integer> Monoid for BitAnd<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(!T::ZERO)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<T: Integer> Commutative for BitAnd<T> {}
impl<T: Integer> Idempotent for BitAnd<T> {}

impl<T: Integer> Monoid for BitOr<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(T::ZERO)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<T: Integer> Commutative for BitOr<T> {}
impl<T: Integer> Idempotent for BitOr<T> {}

/// Last write wins. The identity is "unset" (`None`), never a value of `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assignment<T>(pub Option<T>);

impl<T> Assignment<T> {
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    pub fn val(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }
}

impl<T: Clone> Assignment<T> {
    pub fn value_or(&self, fallback: T) -> T {
        self.0.clone().unwrap_or(fallback)
    }
}

impl<T> Default for Assignment<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<T> for Assignment<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T: Clone> Monoid for Assignment<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        if rhs.0.is_some() {
            rhs.clone()
        } else {
            self.clone()
        }
    }
}

impl<T: Clone> Idempotent for Assignment<T> {}

/// The map `x -> a * x + b`.
///
/// `f.combine(&g)` applies `f` first and then `g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Affine<T> {
    pub a: T,
    pub b: T,
}

impl<T: Integer> Affine<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    #[inline(always)]
    pub fn eval(&self, x: T) -> T {
        self.a.wrapping_mul(x).wrapping_add(self.b)
    }
}

impl<T: Integer> Default for Affine<T> {
    fn default() -> Self {
        <Self as Monoid>::identity()
    }
}

impl<T: Integer> Monoid for Affine<T> {
    #[inline(always)]
    fn identity() -> Self {
        Self {
            a: T::ONE,
            b: T::ZERO,
        }
    }

    #[inline(always)]
    fn combine(&self, rhs: &Self) -> Self {
        // rhs ∘ self
        Self {
            a: rhs.a.wrapping_mul(self.a),
            b: rhs.a.wrapping_mul(self.b).wrapping_add(rhs.b),
        }
    }
}

/// The trivial monoid. Operator of actions that never update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl Monoid for Null {
    #[inline(always)]
    fn identity() -> Self {
        Null
    }

    #[inline(always)]
    fn combine(&self, _rhs: &Self) -> Self {
        Null
    }
}

impl Commutative for Null {}
impl Idempotent for Null {}

impl Group for Null {
    #[inline(always)]
    fn inverse(&self) -> Self {
        Null
    }
}
