//! Wire-format response envelopes for the JSON API.

pub mod api;
