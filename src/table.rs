//! Lookup helpers shared by all constant tables.
//!
//! Plain enumerations implement [`Constant`], which gives every table the same
//! forward (name to value) and reverse (value to name) lookups.  Bitmask
//! tables are generated with the `ads_flags!` macro and decompose a raw value
//! with [`flag_names`].

use std::fmt;
use std::ops::BitAnd;
use std::str::FromStr;

use strum::IntoEnumIterator;

/// Placeholder returned by reverse lookups for values without a name.
///
/// Newer runtimes send values older tables do not know about, so this is a
/// normal result and never an error.
pub const UNKNOWN: &str = "UNKNOWN";

/// An enumerated protocol constant with a canonical name and a wire value.
pub trait Constant: Copy + Into<&'static str> + FromStr + IntoEnumIterator + 'static {
    /// The integer type used on the wire.
    type Repr: Copy + PartialEq + fmt::Debug;

    /// Return the wire value.
    fn value(self) -> Self::Repr;

    /// Return the constant with this wire value, if any.
    fn from_value(value: Self::Repr) -> Option<Self>;

    /// Return the canonical protocol name.
    fn name(self) -> &'static str {
        self.into()
    }

    /// Find a constant by its canonical name (ASCII case-insensitive).
    fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    /// Return the canonical name for a wire value, or [`UNKNOWN`].
    fn lookup(value: Self::Repr) -> &'static str {
        Self::from_value(value).map_or(UNKNOWN, Self::name)
    }
}

/// Return the canonical name of `value` in the table of `C`, or [`UNKNOWN`].
pub fn lookup<C: Constant>(value: C::Repr) -> &'static str {
    C::lookup(value)
}

/// Decompose `value` into the names of all bits from `table` it contains.
///
/// A name is included if all of its bits are set.  Zero-valued entries are
/// only included when `value` itself is zero.  Table order is preserved.
pub fn flag_names<T>(table: &[(&'static str, T)], value: T) -> Vec<&'static str>
where
    T: Copy + Default + PartialEq + BitAnd<Output = T>,
{
    let zero = T::default();
    table
        .iter()
        .filter(|&&(_, bits)| value & bits == bits && (bits != zero || value == zero))
        .map(|&(name, _)| name)
        .collect()
}

/// Implement [`Constant`] and `TryFrom<repr>` for enums deriving
/// `strum::FromRepr`, `IntoStaticStr`, `EnumString` and `EnumIter`.
macro_rules! impl_constant {
    ($($ty:ident: $repr:ty),* $(,)?) => {$(
        impl $crate::table::Constant for $ty {
            type Repr = $repr;

            fn value(self) -> $repr {
                self as $repr
            }

            fn from_value(value: $repr) -> Option<Self> {
                Self::from_repr(value)
            }
        }

        impl std::convert::TryFrom<$repr> for $ty {
            type Error = &'static str;

            fn try_from(value: $repr) -> std::result::Result<Self, &'static str> {
                Self::from_repr(value).ok_or(concat!("invalid ", stringify!($ty), " constant"))
            }
        }
    )*};
}

/// Create a newtype over an integer representing a set of named bits.
///
/// Each bit gets an associated constant and a canonical name; the `TABLE`
/// keeps declaration order for stable diagnostics.
macro_rules! ads_flags {
    (
        $(#[$outer:meta])*
        pub struct $name:ident: $repr:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr => $text:literal;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name($repr);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )*

            /// All named bits as `(name, bits)`, in declaration order.
            pub const TABLE: &'static [(&'static str, $repr)] = &[$(($text, $value)),*];

            /// Wrap a raw value; unnamed bits are kept.
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// Return the raw value.
            pub const fn bits(self) -> $repr {
                self.0
            }

            /// Check if all bits of `other` are set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Check if no bit is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Return the names of all named bits set in this value.
            pub fn names(self) -> Vec<&'static str> {
                $crate::table::flag_names(Self::TABLE, self.0)
            }

            /// Find a single named bit by name (ASCII case-insensitive).
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                Self::TABLE.iter()
                           .find(|(text, _)| text.eq_ignore_ascii_case(name))
                           .map(|&(_, bits)| Self(bits))
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl From<$repr> for $name {
            fn from(bits: $repr) -> Self {
                Self(bits)
            }
        }

        impl From<$name> for $repr {
            fn from(flags: $name) -> Self {
                flags.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use itertools::Itertools;
                write!(f, "{}({:#x}: {})", stringify!($name), self.0,
                       self.names().iter().format(" | "))
            }
        }
    };
}
