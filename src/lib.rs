//! Income Tax Estimation Engine for Salaried Taxpayers
//!
//! This crate computes the exemptions a salaried taxpayer can claim (HRA,
//! standard deduction, Sections 80C, 80D and 80CCD) and the slab-wise income
//! tax under the old and new regimes for FY 2022-23, and serves both over a
//! small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
