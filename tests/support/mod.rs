#![allow(dead_code)]

pub mod chat;
pub mod http_stub;
pub mod klines;
