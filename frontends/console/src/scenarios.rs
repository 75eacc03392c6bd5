
use std::fmt::Display;

use ringq::{Cursor, Error, RingBuffer};

use crate::error::DemoError;
use crate::person::{emperors, Person};

const LANGUAGES: [&str; 5] = ["Java", "C++", "PHP", "Go lang", "SQL"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scenario {
    Int,
    Float,
    String,
    Person,
    Nested,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [Scenario::Int, Scenario::Float, Scenario::String, Scenario::Person, Scenario::Nested];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Int => "int",
            Scenario::Float => "float",
            Scenario::String => "string",
            Scenario::Person => "person",
            Scenario::Nested => "nested",
        }
    }

    pub fn from_name(name: &str) -> Option<Scenario> {
        Scenario::ALL.into_iter().find(|scenario| scenario.name() == name)
    }

    pub fn run(self, options: &ScenarioOptions) -> Result<(), DemoError> {
        log::info!("running the {} scenario", self.name());
        match self {
            Scenario::Int => int_scenario(options.capacity),
            Scenario::Float => float_scenario(),
            Scenario::String => string_scenario(),
            Scenario::Person => person_scenario(),
            Scenario::Nested => nested_scenario(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScenarioOptions {
    pub capacity: isize,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            capacity: 20,
        }
    }
}

fn show<T: Display>(label: &str, buffer: &RingBuffer<T>) {
    println!("{}:\n{}", label, buffer);
}

fn int_scenario(capacity: isize) -> Result<(), DemoError> {
    let empty = RingBuffer::<i32>::new();
    check!(empty.capacity() == 0 && empty.is_empty(), "a default buffer should be empty");
    expect_err!(empty.head(), Error::EmptyBuffer(_));
    expect_err!(empty.at(0), Error::IndexOutOfRange { .. });

    let mut buffer = RingBuffer::with_capacity(capacity)?;
    let half = buffer.capacity() / 2;
    for value in 0..half {
        buffer.enqueue(value as i32 + 5)?;
    }
    show("half full", &buffer);
    check!(buffer.occupied_count() == half, "expected {} stored elements, found {}", half, buffer.occupied_count());

    let removing = half.min(5);
    for _ in 0..removing {
        let value = buffer.dequeue()?;
        log::debug!("dequeued {}", value);
    }
    show("after dequeuing", &buffer);
    check!(buffer.occupied_count() == half - removing, "dequeue should shrink the buffer");

    if !buffer.is_empty() {
        *buffer.head_mut()? = 1000;
        *buffer.tail_mut()? = 9999;
        check!(*buffer.head()? == 1000 && *buffer.tail()? == 9999, "head and tail should be writable");
        show("after overwriting head and tail", &buffer);
    }

    if buffer.capacity() > 0 {
        for value in 0..100 {
            buffer.enqueue(value + 4)?;
        }
        show("after enqueuing 100 more", &buffer);
        check!(buffer.is_full(), "the buffer should be full after overflowing it");
        check!(*buffer.tail()? == 103, "the tail should be the last value enqueued");

        let copy = buffer.clone();
        let mut assigned = RingBuffer::new();
        assigned.clone_from(&buffer);
        check!(copy == buffer && assigned == buffer, "copies should match their source");
    }

    let loaded = RingBuffer::<i32>::from_values(5, [10i8, 30, 60, 40, -20])?;
    show("loaded from values", &loaded);
    check!(*loaded.head()? == 10 && *loaded.tail()? == -20, "loading should keep insertion order");

    let truncated = RingBuffer::<i32>::from_values(2, [10i8, 30, 60, 40, -20])?;
    show("loaded into a smaller buffer", &truncated);
    check!(*truncated.head()? == 40 && *truncated.tail()? == -20, "only the last values should remain");

    expect_err!(RingBuffer::<i32>::from_values(0, [1, 2, 3]), Error::EmptyBuffer(_));
    expect_err!(RingBuffer::<i32>::from_values(-314, [1, 2, 3]), Error::NegativeCapacity(_));
    expect_err!(RingBuffer::<i32>::with_capacity(0)?.enqueue(10), Error::EmptyBuffer(_));

    buffer.clear();
    println!("cleared: {}", buffer);
    expect_err!(buffer.dequeue(), Error::EmptyBuffer(_));
    Ok(())
}

fn float_scenario() -> Result<(), DemoError> {
    let mut buffer = RingBuffer::with_capacity(10)?;
    for index in 0..buffer.capacity() {
        buffer.enqueue(index as f64 / 2.0)?;
    }
    show("halves", &buffer);

    let detached = Cursor::<f64>::detached();
    check!(detached == Cursor::<f64>::default(), "detached cursors should be equal");

    let mut cursor = buffer.begin();
    let end = buffer.end();
    check!(cursor != end, "begin and end of a full buffer should differ");
    let mut values = vec![];
    while cursor != end {
        if let Some(value) = cursor.get() {
            values.push(value.to_string());
        }
        cursor.move_next();
    }
    println!("queue: {}", values.join(" "));

    let begin = buffer.begin();
    let mut ahead = begin;
    ahead.move_next();
    check!(ahead != begin && ahead > begin, "a cursor that moved should be ahead");
    check!(ahead.get() == Some(&0.5), "the second element should be 0.5");
    check!((ahead + 3).get() == Some(&2.0), "three more places should land on 2");
    check!(end.distance_from(&begin) == Some(10), "a full buffer should span its capacity");

    let mut writer = buffer.begin_mut();
    while let Some(value) = writer.get_mut() {
        *value = 42.0;
        writer.move_next();
    }
    check!(buffer.iter().all(|value| *value == 42.0), "every element should have been overwritten");
    show("overwritten", &buffer);
    Ok(())
}

fn string_scenario() -> Result<(), DemoError> {
    let mut buffer = RingBuffer::with_capacity(20)?;
    buffer.enqueue_all(LANGUAGES.map(String::from))?;
    show("languages", &buffer);

    let mut cursor = buffer.begin_mut();
    check!(cursor.get().map(String::as_str) == Some("Java"), "the head should be Java");
    cursor.move_next();
    if let Some(language) = cursor.get_mut() {
        *language = String::from("C#");
        language.push_str(" (was C++)");
    }
    let read_only: Cursor<String> = cursor.into();
    check!(read_only.peek(-1).map(String::as_str) == Some("Java"), "one step back should be the head");

    check!(buffer.at(1)?.contains('#'), "the second language should have been replaced");
    show("after replacing C++", &buffer);

    let mut small = RingBuffer::with_capacity(3)?;
    for language in LANGUAGES {
        small.enqueue(language.to_string())?;
    }
    check!(small.head()? == "PHP" && small.tail()? == "SQL", "only the last three languages should remain");
    let removed = small.dequeue()?;
    log::info!("dequeued {}", removed);
    show("after dequeuing", &small);
    Ok(())
}

fn person_scenario() -> Result<(), DemoError> {
    let mut buffer = RingBuffer::with_capacity(5)?;
    buffer.enqueue_all(emperors())?;
    show("emperors", &buffer);

    let starting_with_o = buffer.iter().filter(|person| person.name_starts_with('O')).count();
    check!(starting_with_o == 1, "expected one name starting with O, found {}", starting_with_o);

    let mut copy = buffer.clone();
    copy.enqueue(Person::new("Adriano", "Publio Elio"))?;
    check!(copy != buffer, "changing the copy should leave the source alone");
    check!(buffer.head()? == &Person::new("Giulio", "Cesare"), "the source should still start with Giulio");
    check!(copy.head()? == &Person::new("Marco", "Aurelio"), "the copy should have dropped its oldest element");
    show("copy after one more enqueue", &copy);

    let mut cursor = copy.begin();
    cursor += 2;
    check!(cursor.get().map(|person| person.name.as_str()) == Some("Tito"), "two places on should be Tito");
    cursor -= 3;
    check!(cursor.get().map(|person| person.name.as_str()) == Some("Adriano"), "three back should wrap to the tail");

    while let Ok(person) = buffer.dequeue() {
        log::debug!("dequeued {}", person);
    }
    check!(buffer.is_empty(), "every element should have been dequeued");
    Ok(())
}

fn nested_scenario() -> Result<(), DemoError> {
    let mut element = RingBuffer::with_capacity(5)?;
    for index in 0..element.capacity() {
        element.enqueue(index as f64)?;
    }

    let mut outer = RingBuffer::with_capacity(5)?;
    for _ in 0..outer.capacity() {
        outer.enqueue(element.clone())?;
    }

    let mut rows = vec![];
    let mut cursor = outer.begin();
    while let Some(inner) = cursor.get() {
        let values: Vec<String> = inner.iter().map(|value| value.to_string()).collect();
        rows.push(format!("[ {} ]", values.join(" ")));
        cursor.move_next();
    }
    println!("queue made of queues: {}", rows.join(" "));
    expect_err!(outer.at(100), Error::IndexOutOfRange { .. });

    let copy = outer.clone();
    let mut assigned = RingBuffer::new();
    assigned.clone_from(&outer);
    check!(copy.capacity() == outer.capacity() && assigned == outer, "copies should match their source");

    let removed = outer.dequeue()?;
    check!(removed == element, "the dequeued buffer should match what was enqueued");
    check!(outer.occupied_count() == outer.capacity() - 1 && !outer.is_full(), "one slot should be free");
    println!("tail of the outer buffer:\n{}", outer.tail()?);

    outer.clear();
    expect_err!(outer.dequeue(), Error::EmptyBuffer(_));
    Ok(())
}
