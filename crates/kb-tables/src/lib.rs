//! Rows of the NNSA KB Core schema.
//!
//! Each type is declared with [`kb_columns::define_table!`] and gets the text, binary, cursor
//! and SQL codecs of `kb-columns` through its [`Row`](kb_columns::Row) implementation.

#![forbid(unsafe_code)]

use kb_columns::Limit;

mod amplitude;
mod arrival;
mod assoc;
mod origerr;
mod origin;
mod remark;
mod sensor;
mod stamag;
mod wfdisc;

pub use amplitude::Amplitude;
pub use arrival::Arrival;
pub use assoc::Assoc;
pub use origerr::Origerr;
pub use origin::Origin;
pub use remark::Remark;
pub use sensor::Sensor;
pub use stamag::Stamag;
pub use wfdisc::Wfdisc;

pub const SCHEMA_NAME: &str = "NNSA KB Core";

/// Setter bounds matching the `number(p)` column precisions.
pub(crate) const NUMBER4: Limit = Limit::Below(10_000);
pub(crate) const NUMBER8: Limit = Limit::Below(100_000_000);
pub(crate) const NUMBER9: Limit = Limit::Below(1_000_000_000);
pub(crate) const NUMBER10: Limit = Limit::Below(10_000_000_000);

/// NA for epoch times.
pub(crate) const TIME_NA: f64 = -9_999_999_999.999;
/// NA for end times.
pub(crate) const ENDTIME_NA: f64 = 9_999_999_999.999;
