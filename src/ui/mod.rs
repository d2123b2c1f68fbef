pub mod auto_refresh;
pub mod mvi;
