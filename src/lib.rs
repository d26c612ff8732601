pub mod authorizer;
pub mod config;
pub mod http;
pub mod lambda_structure;
pub mod pipeline;
pub mod result;
