
use std::fmt;

/// A record with two fields, used to fill buffers with something other than numbers
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub surname: String,
}

impl Person {
    pub fn new<S>(name: S, surname: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    pub fn name_starts_with(&self, initial: char) -> bool {
        self.name.starts_with(initial)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.name, self.surname)
    }
}

pub fn emperors() -> [Person; 5] {
    [
        Person::new("Giulio", "Cesare"),
        Person::new("Marco", "Aurelio"),
        Person::new("Ottaviano", "Augusto"),
        Person::new("Tito", "Flavio"),
        Person::new("Lucio", "Vero"),
    ]
}
