//! Evidence aggregation core — pure, stateless functions over a borrowed
//! batch of profile records. No I/O, no shared state, total over every
//! well-formed input including the empty batch.

pub mod confidence;
pub mod frequency;
pub mod report;
