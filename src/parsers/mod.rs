//! Format parsers: raw JSON text in, validated article records out.
//!
//! Two formats are supported:
//! - [`newsapi`]: the NewsAPI response envelope
//! - [`simple`]: a bare article object, or an array of them
//!
//! Both parsers take the already-fetched text (the data-source binding lives
//! in [`crate::client`]), filter records through [`crate::validate`] with a
//! warning per rejection, and preserve input order.

pub mod newsapi;
pub mod simple;
