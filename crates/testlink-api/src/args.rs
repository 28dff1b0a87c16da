// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered argument lists for remote calls.
//!
//! The server picks a code path from which arguments are present, so an
//! omitted argument is not the same as one sent as zero or empty. Operations
//! build their lists with [`Args`] and append optional arguments explicitly.

use testlink_core::RpcValue;

/// Name of the credential argument sent with every keyed call.
pub const DEV_KEY: &str = "devKey";

/// An ordered list of named call arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    items: Vec<(&'static str, RpcValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument.
    pub fn arg(mut self, name: &'static str, value: impl Into<RpcValue>) -> Self {
        self.items.push((name, value.into()));
        self
    }

    /// Appends an argument only when `value` is set.
    pub fn opt<V: Into<RpcValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.arg(name, v),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|(name, _)| *name)
    }

    pub fn as_slice(&self) -> &[(&'static str, RpcValue)] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let args = Args::new().arg("b", 1).arg("a", "x");
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(args.as_slice()[1].1, RpcValue::from("x"));
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let args = Args::new()
            .arg("testcaseid", 5)
            .opt("version", None::<i64>)
            .opt("platformid", Some(3));
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["testcaseid", "platformid"]);
        assert_eq!(args.len(), 2);
    }
}
