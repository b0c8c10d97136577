//! Optional – a generic wrapper for values that may be logically absent.
//!
//! [`Optional<T>`] holds zero or one `T`. It stands in for the two usual
//! workarounds for an absent field: a nullable reference, or a sentinel zero
//! value that cannot be told apart from real data.
//!
//! ## Modules
//! * [`optional`] – The [`Optional`] type: construction, presence tests,
//!   conditional access, defaulting and mapping.
//! * [`codec`] – serde and plain-text hooks. Encoding is transparent (a
//!   present value looks like the bare value), and an empty value can be
//!   omitted from the output entirely.
//! * [`error`] – [`OptionalError`], raised only by the opt-in
//!   [`Optional::require`].
//!
//! ## Quick Start
//! ```
//! use optional::Optional;
//!
//! let stored = 1001;
//! let values = [
//!     Optional::empty(),
//!     Optional::present(1000),
//!     Optional::from_ref(None),
//!     Optional::from_ref(Some(&stored)),
//! ];
//!
//! let mut seen = Vec::new();
//! for v in &values {
//!     v.if_present(|i| seen.push(*i));
//! }
//! assert_eq!(seen, [1000, 1001]);
//!
//! let defaulted: Vec<i32> = values.iter().map(|v| v.or_else(1)).collect();
//! assert_eq!(defaulted, [1, 1000, 1, 1001]);
//!
//! let texts: Vec<String> = values.iter().map(|v| v.map(|i| i * 2).to_string()).collect();
//! assert_eq!(texts, ["", "2000", "", "2002"]);
//! ```
//!
//! ## Omitting empty fields
//! Pair `#[serde(default)]` with `skip_serializing_if = "Optional::is_empty"`
//! to get "absent means omitted" without a pointer or an `Option` that would
//! serialize as `null`. See [`codec`] for the exact encode/decode rules.

pub mod codec;
pub mod error;
pub mod optional;

pub use crate::error::{OptionalError, Result};
pub use crate::optional::Optional;
