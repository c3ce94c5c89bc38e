#![allow(dead_code)]

mod response_capture;

pub use response_capture::CapturingResponseHandler;
