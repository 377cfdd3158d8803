/// Declares an enumeration whose members are fixed at compile time.
///
/// Expands to a type with one associated function per member, plus an
/// `enumeration()` function exposing the full [Enumeration](crate::Enumeration)
/// registry. The registry is built once, on first access.
///
/// ```
/// use enumeration::declare_enumeration;
///
/// declare_enumeration!(Color { RED, GREEN, BLUE });
///
/// assert_eq!(1, Color::GREEN().value());
/// assert_eq!("GREEN", Color::GREEN().to_string());
/// assert!(Color::enumeration().contains(2));
/// ```
///
/// Declaring the same member twice is a compile error (duplicate associated
/// function), so a declared enumeration can never fail validation at runtime.
#[macro_export]
macro_rules! declare_enumeration {
    ($vis:vis $name:ident { $($member:ident),+ $(,)? }) => {
        $vis struct $name;

        impl $name {
            $(
                #[allow(dead_code, non_snake_case)]
                $vis fn $member() -> &'static $crate::Member {
                    Self::enumeration().get(stringify!($member)).expect(stringify!($member))
                }
            )+

            $vis fn enumeration() -> &'static $crate::Enumeration {
                static ENUMERATION: ::std::sync::LazyLock<$crate::Enumeration> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Enumeration::define(
                            stringify!($name),
                            [$(stringify!($member)),+],
                        )
                        .expect(stringify!($name))
                    });
                &ENUMERATION
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn declared_members() {
        declare_enumeration!(Color { RED, GREEN, BLUE });

        assert_eq!(0, Color::RED().value());
        assert_eq!(1, Color::GREEN().value());
        assert_eq!(2, Color::BLUE().value());
        assert_eq!("BLUE", Color::BLUE().name());
        assert_eq!("Color", Color::BLUE().enumeration());
    }

    #[test]
    fn declared_registry() {
        declare_enumeration!(Weekday {
            MONDAY,
            TUESDAY,
            WEDNESDAY,
            THURSDAY,
            FRIDAY,
        });

        let weekdays = Weekday::enumeration();
        assert_eq!("Weekday", weekdays.name());
        assert_eq!(5, weekdays.members().len());
        assert_eq!("THURSDAY", weekdays.name_of(3).unwrap());
        assert!(weekdays.contains(Weekday::FRIDAY()));
        assert!(!weekdays.contains(5));
    }

    #[test]
    fn declared_is_static() {
        declare_enumeration!(Flag { ON, OFF });

        let first: &'static crate::Member = Flag::ON();
        let second = Flag::ON();
        assert!(std::ptr::eq(first, second));
    }
}
