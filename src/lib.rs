pub mod codec;
mod config;
mod context;
pub mod decor;
mod error;
mod factory;
pub mod io;
mod tests;
pub mod token;

pub use crate::codec::{ObjectCodec, TreeCodec, Value};
pub use crate::config::FactoryConfig;
pub use crate::context::IoContext;
pub use crate::decor::{
    Decorations, InputDecorator, OutputDecorator, ZstdInputDecorator, ZstdOutputDecorator,
};
pub use crate::error::FactoryError;
pub use crate::factory::TokenStreamFactory;
pub use crate::token::{Token, TokenReader, TokenWriter};
