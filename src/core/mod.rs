//! 核心层：错误处理、响应结构、提取器与中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
