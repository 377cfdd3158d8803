use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Sub;
use std::sync::Arc;

/// One named integer constant belonging to an [Enumeration](crate::Enumeration).
///
/// A member is interchangeable with a plain integer in comparisons and
/// arithmetic, but displays as its declared name. It is immutable: the name,
/// the value and the owning enumeration are fixed when the enumeration is
/// defined.
#[derive(Clone)]
pub struct Member {
    enumeration: Arc<str>,
    name: Arc<str>,
    value: i64,
}

impl Member {
    pub(crate) fn new(enumeration: Arc<str>, name: Arc<str>, value: i64) -> Self {
        Self {
            enumeration,
            name,
            value,
        }
    }

    /// The declared name of this member.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned integer value, i.e. the zero-based declaration position.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The name of the enumeration this member belongs to.
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }
}

/// Displays as the declared name, not the numeric value.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}={}>", self.enumeration, self.name, self.value)
    }
}

// Equality, ordering and hashing follow the integer value, so members mix
// freely with plain integers in comparisons and as map keys.

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<i64> for Member {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<Member> for i64 {
    fn eq(&self, other: &Member) -> bool {
        *self == other.value
    }
}

impl PartialOrd<i64> for Member {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<Member> for i64 {
    fn partial_cmp(&self, other: &Member) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl From<Member> for i64 {
    fn from(member: Member) -> Self {
        member.value
    }
}

impl From<&Member> for i64 {
    fn from(member: &Member) -> Self {
        member.value
    }
}

impl Add<i64> for &Member {
    type Output = i64;

    fn add(self, rhs: i64) -> i64 {
        self.value + rhs
    }
}

impl Add<&Member> for i64 {
    type Output = i64;

    fn add(self, rhs: &Member) -> i64 {
        self + rhs.value
    }
}

impl Sub<i64> for &Member {
    type Output = i64;

    fn sub(self, rhs: i64) -> i64 {
        self.value - rhs
    }
}

impl Sub<&Member> for i64 {
    type Output = i64;

    fn sub(self, rhs: &Member) -> i64 {
        self - rhs.value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::Enumeration;

    fn colors() -> Enumeration {
        Enumeration::define("Color", ["RED", "GREEN", "BLUE"]).unwrap()
    }

    #[test]
    fn member_compare() {
        let colors = colors();
        let red = colors.get("RED").unwrap();
        let green = colors.get("GREEN").unwrap();

        assert!(*red == 0);
        assert!(0 == *red);
        assert!(*green == 1);
        assert!(*red < *green);
        assert!(*green > 0);
        assert!(0 < *green);
        assert_ne!(red, green);

        let other = Enumeration::define("Other", ["FIRST"]).unwrap();
        assert_eq!(red, other.get("FIRST").unwrap());
    }

    #[test]
    fn member_arithmetic() {
        let colors = colors();
        let red = colors.get("RED").unwrap();
        let green = colors.get("GREEN").unwrap();

        assert_eq!(green.value(), red + 1);
        assert_eq!(green.value(), 1 + red);
        assert_eq!(red.value(), green - 1);
        assert_eq!(2, 3 - green);
        assert_eq!(1i64, i64::from(green));
        assert_eq!(1i64, i64::from(green.clone()));
    }

    #[test]
    fn member_display() {
        let colors = colors();
        let green = colors.get("GREEN").unwrap();
        assert_eq!("GREEN", green.to_string());
        assert_eq!("<Color: GREEN=1>", format!("{green:?}"));
        assert_eq!("GREEN", green.name());
        assert_eq!("Color", green.enumeration());
    }

    #[test]
    fn member_hash() {
        let colors = colors();
        let mut map = HashMap::new();
        map.insert(colors.get("RED").unwrap().clone(), "first");
        map.insert(colors.get("BLUE").unwrap().clone(), "last");

        assert_eq!("first", map[colors.get("RED").unwrap()]);
        assert_eq!("last", map[colors.get("BLUE").unwrap()]);
    }
}
