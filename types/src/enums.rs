//! Wire enumerations carried by proposals.
//!
//! Payloads carry these as integer codes. A code outside the known set is kept
//! as `Unrecognized` so that validators can reject it with the offending value
//! instead of failing at decode time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A code this build does not know.
            Unrecognized(i32),
        }

        impl $name {
            /// Integer code used on the wire.
            pub fn code(&self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unrecognized(code) => *code,
                }
            }

            /// Human-readable name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(_) => "Unrecognized",
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unrecognized(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Unrecognized(code) => write!(f, "{}", code),
                    other => f.write_str(other.name()),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle status of a market.
    pub enum MarketStatus {
        /// Not set; in update proposals this means "leave unchanged".
        Unspecified = 0 => "Unspecified",
        Active = 1 => "Active",
        Paused = 2 => "Paused",
        Demolished = 3 => "Demolished",
        Expired = 4 => "Expired",
    }
}

wire_enum! {
    /// Source of an oracle price feed.
    pub enum OracleType {
        Unspecified = 0 => "Unspecified",
        Band = 1 => "Band",
        PriceFeed = 2 => "PriceFeed",
        Coinbase = 3 => "Coinbase",
        Chainlink = 4 => "Chainlink",
        Razor = 5 => "Razor",
        Dia = 6 => "Dia",
        Api3 = 7 => "API3",
        Uma = 8 => "Uma",
        Pyth = 9 => "Pyth",
        BandIbc = 10 => "BandIBC",
        /// Prices pushed by a registered provider; the only type binary options accept.
        Provider = 11 => "Provider",
    }
}

wire_enum! {
    /// Which exchange an enable proposal switches on.
    pub enum ExchangeType {
        Unspecified = 0 => "EXCHANGE_UNSPECIFIED",
        Spot = 1 => "SPOT",
        Derivatives = 2 => "DERIVATIVES",
    }
}

impl Default for MarketStatus {
    fn default() -> Self {
        Self::Unspecified
    }
}

impl Default for OracleType {
    fn default() -> Self {
        Self::Unspecified
    }
}

impl Default for ExchangeType {
    fn default() -> Self {
        Self::Unspecified
    }
}
