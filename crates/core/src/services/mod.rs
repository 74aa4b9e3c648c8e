pub mod assembler;
pub mod formatter;
pub mod presenter;
pub mod swap_parser;
pub mod token_resolver;
