//! Leveled internal assertions. Simple assertions are always checked; moderate assertions cost
//! more and are only checked in tests or with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const TIMETABLING_ASSERT_LEVEL_DEFINITION: u8 = TIMETABLING_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const TIMETABLING_ASSERT_LEVEL_DEFINITION: u8 = TIMETABLING_ASSERT_MODERATE;

pub const TIMETABLING_ASSERT_SIMPLE: u8 = 1;
pub const TIMETABLING_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! timetabling_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TIMETABLING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TIMETABLING_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabling_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::TIMETABLING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TIMETABLING_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
