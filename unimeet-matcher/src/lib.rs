//! Top-K candidate ranking for UniMeet.
//!
//! This crate provides [`TopKMatcher`], the default implementation of the
//! [`Matcher`](unimeet_core::Matcher) trait. It scores every candidate
//! against the target with a caller-supplied
//! [`CompatibilityScorer`](unimeet_core::CompatibilityScorer), sorts by the
//! aggregate score, and keeps the best `top_k`.
//!
//! Each candidate is scored independently, so a matcher holds no mutable
//! state and can serve concurrent requests through a shared reference.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod matcher;

pub use matcher::TopKMatcher;
