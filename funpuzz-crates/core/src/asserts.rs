//! Leveled assertion macros.
//!
//! The checks are grouped by how expensive they are; a check only runs when
//! [`FUNPUZZ_ASSERT_LEVEL_DEFINITION`] is at least its level.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const FUNPUZZ_ASSERT_LEVEL_DEFINITION: u8 = FUNPUZZ_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const FUNPUZZ_ASSERT_LEVEL_DEFINITION: u8 = FUNPUZZ_ASSERT_MODERATE;

pub const FUNPUZZ_ASSERT_SIMPLE: u8 = 1;
pub const FUNPUZZ_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! funpuzz_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::FUNPUZZ_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FUNPUZZ_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! funpuzz_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::FUNPUZZ_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FUNPUZZ_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! funpuzz_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::FUNPUZZ_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FUNPUZZ_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
