//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`], so two
//! artifacts with identical bytes but different meaning never collide.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Board arrangement identity (`side || tiles`).
    BoardIdentity => b"TESSERA::BOARD_IDENTITY::V1\0",

    /// Canonical JSON of a search trace.
    SearchTrace => b"TESSERA::SEARCH_TRACE::V1\0",

    /// Canonical JSON of a run policy snapshot.
    RunPolicy => b"TESSERA::RUN_POLICY::V1\0",

    /// Canonical JSON of a run record (timing excluded).
    RunRecord => b"TESSERA::RUN_RECORD::V1\0",
}
