use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use nameth::NamedEnumValues as _;
use nameth::NamedType as _;
use nameth::nameth;
use tracing::debug;

use crate::member::Member;

/// A closed set of named integer constants.
///
/// The set is built once by [Enumeration::define] and is immutable afterwards:
/// there is no way to add, remove or rename members, so sharing an
/// `Enumeration` across threads needs no locking.
///
/// Each member's value is its zero-based position in the declared name list,
/// which makes the name → value and value → name mappings mutual inverses by
/// construction.
pub struct Enumeration {
    name: Arc<str>,
    members: Vec<Member>,
    index: HashMap<Arc<str>, usize>,
}

impl Enumeration {
    /// Builds an enumeration from an ordered list of unique, non-empty member
    /// names.
    ///
    /// Validation is one-shot: a malformed declaration fails here and never
    /// later.
    ///
    /// ```
    /// # use enumeration::Enumeration;
    /// let colors = Enumeration::define("Color", ["RED", "GREEN", "BLUE"]).unwrap();
    /// assert_eq!(2, colors.get("BLUE").unwrap().value());
    /// ```
    pub fn define(
        name: impl Into<Arc<str>>,
        member_names: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Result<Self, DefinitionError> {
        let name: Arc<str> = name.into();
        let mut members: Vec<Member> = vec![];
        let mut index = HashMap::new();
        for member_name in member_names {
            let member_name: Arc<str> = member_name.into();
            let position = members.len();
            if member_name.is_empty() {
                return Err(DefinitionError::EmptyName {
                    enumeration: name.to_string(),
                    position,
                });
            }
            if index.insert(member_name.clone(), position).is_some() {
                return Err(DefinitionError::DuplicateName {
                    enumeration: name.to_string(),
                    member: member_name.to_string(),
                });
            }
            members.push(Member::new(name.clone(), member_name, position as i64));
        }
        if members.is_empty() {
            return Err(DefinitionError::NoMembers {
                enumeration: name.to_string(),
            });
        }
        debug!("Defined enumeration {name} with {n} members", n = members.len());
        Ok(Self {
            name,
            members,
            index,
        })
    }

    /// The name of the enumeration itself.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member with the given declared name.
    pub fn get(&self, name: &str) -> Result<&Member, UnknownNameError> {
        let position = self.index.get(name).ok_or_else(|| UnknownNameError {
            enumeration: self.name.to_string(),
            name: name.to_owned(),
        })?;
        Ok(&self.members[*position])
    }

    /// Reverse lookup: returns the declared name whose assigned value equals
    /// `value`.
    pub fn name_of(&self, value: i64) -> Result<&str, UnknownValueError> {
        usize::try_from(value)
            .ok()
            .and_then(|position| self.members.get(position))
            .map(Member::name)
            .ok_or_else(|| UnknownValueError {
                enumeration: self.name.to_string(),
                value,
            })
    }

    /// Membership test by value.
    ///
    /// Accepts plain integers and [Member]s interchangeably; members compare
    /// as their integer value.
    pub fn contains(&self, value: impl Into<i64>) -> bool {
        let value: i64 = value.into();
        usize::try_from(value).is_ok_and(|position| position < self.members.len())
    }

    /// Membership test by declared name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The members, in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl<'t> IntoIterator for &'t Enumeration {
    type Item = &'t Member;
    type IntoIter = std::slice::Iter<'t, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl fmt::Debug for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, member) in self.members.iter().enumerate() {
            let separator = if i == 0 { "" } else { "," };
            write!(f, "{separator} {}={}", member.name(), member.value())?;
        }
        write!(f, " }}")
    }
}

/// A malformed declaration, rejected when the enumeration is defined.
#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum DefinitionError {
    #[error("[{n}] Enumeration '{enumeration}' does not declare any member", n = self.name())]
    NoMembers { enumeration: String },

    #[error("[{n}] Enumeration '{enumeration}' declares a member with an empty name at position {position}", n = self.name())]
    EmptyName {
        enumeration: String,
        position: usize,
    },

    #[error("[{n}] Enumeration '{enumeration}' declares '{member}' more than once", n = self.name())]
    DuplicateName { enumeration: String, member: String },
}

/// Access to a member name that was never declared.
#[nameth]
#[derive(thiserror::Error, Debug)]
#[error("[{t}] Enumeration '{enumeration}' has no member named '{name}'", t = Self::type_name())]
pub struct UnknownNameError {
    pub enumeration: String,
    pub name: String,
}

/// Reverse lookup of a value that was never assigned to a member.
#[nameth]
#[derive(thiserror::Error, Debug)]
#[error("[{t}] Enumeration '{enumeration}' has no member with value {value}", t = Self::type_name())]
pub struct UnknownValueError {
    pub enumeration: String,
    pub value: i64,
}
