//! Reusable UI widgets

pub mod row_card;
