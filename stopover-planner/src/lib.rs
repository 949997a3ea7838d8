//! Stopover fare planner.
//!
//! A library that answers: "Going from Yasu to Osaka, is it cheaper to exit
//! the gates at Kyoto and buy two tickets, and which trains would I take?"

pub mod domain;
pub mod fare;
pub mod planner;
pub mod report;
