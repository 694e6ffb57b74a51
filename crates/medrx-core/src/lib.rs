//! General-purpose helpers shared across the medrx crates.
//!
//! Nothing here is part of the validation core proper; these are the small
//! utilities callers reach for around it. Deep copies of record values are
//! plain `Clone` on the model types.

pub mod currency;
pub mod datetime;
pub mod error;
pub mod ids;
pub mod text;

pub use currency::{cents_to_dollars, dollars_to_cents, format_cents};
pub use datetime::{format_date, is_future_date, is_past_date, parse_iso_date};
pub use error::{CoreError, Result};
pub use ids::new_record_id;
pub use text::normalized_text;
