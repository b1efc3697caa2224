//! Command implementations for graphstep

pub mod dispatch;
pub mod output;
pub mod replay;
pub mod run;
pub mod validate;
