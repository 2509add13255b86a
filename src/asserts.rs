//! Assertions guarded by a check level.
//!
//! Simple checks protect the bookkeeping of the domain store (pruning an absent value, restoring a
//! present one, querying support under a stale assignment) and are always on. Advanced checks
//! re-verify results the search already relies on, such as a solution satisfying every
//! constraint; they only run in tests or with the `debug-checks` feature.

/// Checks which stay enabled in every build.
pub const ROSTER_CHECKS_SIMPLE: u8 = 1;
/// Checks which re-verify search results.
pub const ROSTER_CHECKS_ADVANCED: u8 = 2;

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ROSTER_CHECK_LEVEL: u8 = ROSTER_CHECKS_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const ROSTER_CHECK_LEVEL: u8 = ROSTER_CHECKS_ADVANCED;

/// Warns that advanced checks are enabled, since they slow the search down considerably.
#[macro_export]
#[doc(hidden)]
macro_rules! print_roster_assert_warning_message {
    () => {
        if $crate::asserts::ROSTER_CHECK_LEVEL >= $crate::asserts::ROSTER_CHECKS_ADVANCED {
            log::warn!(
                "Advanced checks are enabled (level {}), expect the search to be slower",
                $crate::asserts::ROSTER_CHECK_LEVEL
            );
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! roster_assert_at_level {
    ($level:expr, $($arg:tt)*) => {
        if $crate::asserts::ROSTER_CHECK_LEVEL >= $level {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! roster_assert_simple {
    ($($arg:tt)*) => {
        $crate::roster_assert_at_level!($crate::asserts::ROSTER_CHECKS_SIMPLE, $($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! roster_assert_advanced {
    ($($arg:tt)*) => {
        $crate::roster_assert_at_level!($crate::asserts::ROSTER_CHECKS_ADVANCED, $($arg)*)
    };
}
