#![doc = include_str!("../README.md")]

mod declare;
mod enumeration;
mod member;

pub use self::enumeration::DefinitionError;
pub use self::enumeration::Enumeration;
pub use self::enumeration::UnknownNameError;
pub use self::enumeration::UnknownValueError;
pub use self::member::Member;
