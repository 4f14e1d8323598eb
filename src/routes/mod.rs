mod health_check;
pub mod mensagens;

pub use health_check::*;
