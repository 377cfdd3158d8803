#![cfg(test)]

use enumeration::DefinitionError;
use enumeration::Enumeration;
use enumeration::declare_enumeration;

declare_enumeration!(pub Color { RED, GREEN, BLUE });

#[test]
fn declared_enumeration() {
    assert_eq!(0, Color::RED().value());
    assert_eq!(1, Color::GREEN().value());
    assert_eq!(2, Color::BLUE().value());

    assert_eq!("GREEN", Color::GREEN().to_string());
    assert_eq!("<Color: GREEN=1>", format!("{:?}", Color::GREEN()));

    let colors = Color::enumeration();
    assert_eq!("GREEN", colors.name_of(1).unwrap());
    assert!(colors.contains(2));
    assert!(colors.contains(Color::BLUE()));
    assert!(!colors.contains(5));
}

#[test]
fn declared_and_defined_agree() {
    let colors = Enumeration::define("Color", ["RED", "GREEN", "BLUE"]).unwrap();
    for member in &colors {
        let declared = Color::enumeration().get(member.name()).unwrap();
        assert_eq!(member, declared);
        assert_eq!(member.name(), declared.name());
        assert_eq!(member.value(), declared.value());
    }
}

#[test]
fn round_trip() {
    let names = ["FOO", "BAR", "RAB", "OOF"];
    let e = Enumeration::define("EnumTest", names).unwrap();
    for name in names {
        let member = e.get(name).unwrap();
        assert_eq!(name, e.name_of(member.value()).unwrap());
    }
}

#[test]
fn members_are_integers() {
    let e = Enumeration::define("EnumTest", ["foo", "bar", "rab", "oof"]).unwrap();
    let foo = e.get("foo").unwrap();
    let bar = e.get("bar").unwrap();

    assert!(*foo == 0);
    assert!(*foo == 1 - 1);
    assert!(foo + 1 == bar.value());
    assert_eq!("<EnumTest: bar=1>", format!("{bar:?}"));

    assert!(e.contains(3));
    assert!(!e.contains(4));
    assert!(e.contains_name("foo"));
    assert!(!e.contains_name("blech"));
}

#[test]
fn definition_errors() {
    let error = Enumeration::define("Empty", Vec::<&str>::new()).unwrap_err();
    assert!(matches!(error, DefinitionError::NoMembers { .. }));

    let error = Enumeration::define("Dup", ["FOO", "FOO"]).unwrap_err();
    assert!(matches!(error, DefinitionError::DuplicateName { .. }));

    let error = Enumeration::define("Blank", [""]).unwrap_err();
    assert!(matches!(error, DefinitionError::EmptyName { .. }));
}

#[test]
fn unknown_lookups() {
    let e = Enumeration::define("E", ["FOO"]).unwrap();

    let error = e.get("BAR").unwrap_err();
    assert_eq!("[UnknownNameError] Enumeration 'E' has no member named 'BAR'", error.to_string());

    let error = e.name_of(1).unwrap_err();
    assert_eq!("[UnknownValueError] Enumeration 'E' has no member with value 1", error.to_string());
}

#[test]
fn shared_across_threads() {
    let e = std::sync::Arc::new(Enumeration::define("Color", ["RED", "GREEN", "BLUE"]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let e = e.clone();
            std::thread::spawn(move || {
                assert_eq!("GREEN", e.name_of(1).unwrap());
                assert!(e.contains(2));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
