// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Thin wrapper over [`pretty_assertions::assert_eq!`] so that failing tests print a
/// colored diff of the two sides.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
