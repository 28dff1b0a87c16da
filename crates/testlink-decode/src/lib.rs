// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply decoding and error normalization for the TestLink client.
//!
//! Everything here is a pure function of a raw [`RpcValue`](testlink_core::RpcValue):
//! - [`errors`] finds in-band error indicators and applies per-call whitelists,
//! - [`shape`] classifies a reply as absent, scalar, record, array or keyed map,
//! - [`records`] turns single structures into domain records,
//! - [`coerce`] holds the total field coercions the records are built from.

pub mod coerce;
pub mod errors;
pub mod records;
pub mod shape;

pub use coerce::{decode_base64, encode_base64};
pub use errors::{ErrorCheck, check_reply, decode_errors};
pub use shape::{Shape, classify, decode_first, decode_list};
