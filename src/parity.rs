//! Structural parity between the async and blocking facades.
//!
//! Facade methods are declared through [`async_operations!`] and
//! [`blocking_operations!`], which also emit an `OPERATIONS` table listing
//! each method's name and parameter list as written. Two facades over the
//! same resource must have equal tables.

/// One facade method: its name and its parameter list as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub name: &'static str,
    pub params: &'static str,
}

/// Declares async facade methods and their `OPERATIONS` table.
macro_rules! async_operations {
    (
        impl $facade:ident {
            $(
                $(#[$meta:meta])*
                pub async fn $op:ident ( $($params:tt)* ) -> $ret:ty $body:block
            )*
        }
    ) => {
        impl $facade<'_> {
            /// Every operation of this facade, in declaration order.
            pub const OPERATIONS: &'static [$crate::parity::Operation] = &[
                $($crate::parity::Operation {
                    name: stringify!($op),
                    params: stringify!($($params)*),
                },)*
            ];

            $(
                $(#[$meta])*
                pub async fn $op ( $($params)* ) -> $ret $body
            )*
        }
    };
}

/// Declares blocking facade methods and their `OPERATIONS` table.
macro_rules! blocking_operations {
    (
        impl $facade:ident {
            $(
                $(#[$meta:meta])*
                pub fn $op:ident ( $($params:tt)* ) -> $ret:ty $body:block
            )*
        }
    ) => {
        impl $facade<'_> {
            /// Every operation of this facade, in declaration order.
            pub const OPERATIONS: &'static [$crate::parity::Operation] = &[
                $($crate::parity::Operation {
                    name: stringify!($op),
                    params: stringify!($($params)*),
                },)*
            ];

            $(
                $(#[$meta])*
                pub fn $op ( $($params)* ) -> $ret $body
            )*
        }
    };
}

pub(crate) use async_operations;
pub(crate) use blocking_operations;
