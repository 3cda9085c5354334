//! サーバーAPI連携

pub mod upload;
