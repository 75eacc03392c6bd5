use ringq::{Error, RingBuffer};

struct TestCase {
    name: &'static str,
    capacity: isize,
    values: &'static [i32],
    dequeues: usize,
    expected: &'static [i32],
    full: bool,
}

#[rustfmt::skip]
const TEST_CASES: &'static [TestCase] = &[
    TestCase {
        name: "fill exactly to capacity",
        capacity: 5,
        values: &[ 10, 30, 60, 40, -20 ],
        dequeues: 0,
        expected: &[ 10, 30, 60, 40, -20 ],
        full: true,
    },
    TestCase {
        name: "overwrite keeps the most recent values",
        capacity: 2,
        values: &[ 10, 30, 60, 40, -20 ],
        dequeues: 0,
        expected: &[ 40, -20 ],
        full: true,
    },
    TestCase {
        name: "partially filled",
        capacity: 10,
        values: &[ 10, 11, 12, 13, 14, 15, 16, 17 ],
        dequeues: 0,
        expected: &[ 10, 11, 12, 13, 14, 15, 16, 17 ],
        full: false,
    },
    TestCase {
        name: "dequeue half of the stored values",
        capacity: 20,
        values: &[ 5, 6, 7, 8, 9, 10, 11, 12, 13, 14 ],
        dequeues: 5,
        expected: &[ 10, 11, 12, 13, 14 ],
        full: false,
    },
    TestCase {
        name: "dequeue after wrapping",
        capacity: 3,
        values: &[ 1, 2, 3, 4, 5 ],
        dequeues: 2,
        expected: &[ 5 ],
        full: false,
    },
    TestCase {
        name: "dequeue everything",
        capacity: 4,
        values: &[ 1, 2, 3 ],
        dequeues: 3,
        expected: &[],
        full: false,
    },
    TestCase {
        name: "capacity of one",
        capacity: 1,
        values: &[ 1, 2, 3 ],
        dequeues: 0,
        expected: &[ 3 ],
        full: true,
    },
];

fn run_test(case: &TestCase) {
    let mut buffer = RingBuffer::with_capacity(case.capacity).unwrap();
    for value in case.values {
        buffer.enqueue(*value).unwrap();
    }

    let removed: Vec<i32> = (0..case.dequeues).map(|_| buffer.dequeue().unwrap()).collect();
    let start = case.values.len().saturating_sub(case.capacity as usize);
    assert_eq!(removed, &case.values[start..start + case.dequeues], "{}: dequeued values", case.name);

    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), case.expected, "{}: contents", case.name);
    assert_eq!(buffer.occupied_count(), case.expected.len(), "{}: occupied", case.name);
    assert_eq!(buffer.capacity(), case.capacity as usize, "{}: capacity", case.name);
    assert_eq!(buffer.is_full(), case.full, "{}: is_full", case.name);
    assert_eq!(buffer.is_empty(), case.expected.is_empty(), "{}: is_empty", case.name);

    match (case.expected.first(), case.expected.last()) {
        (Some(first), Some(last)) => {
            assert_eq!(buffer.head(), Ok(first), "{}: head", case.name);
            assert_eq!(buffer.tail(), Ok(last), "{}: tail", case.name);
        },
        _ => {
            assert!(matches!(buffer.head(), Err(Error::EmptyBuffer(_))), "{}: head", case.name);
            assert!(matches!(buffer.tail(), Err(Error::EmptyBuffer(_))), "{}: tail", case.name);
        },
    }
}

#[test]
fn run_enqueue_dequeue_tests() {
    for case in TEST_CASES {
        run_test(case);
    }
}

#[test]
fn fresh_buffers_are_empty() {
    for capacity in [0, 1, 7, 64] {
        let buffer = RingBuffer::<i32>::with_capacity(capacity).unwrap();
        assert_eq!(buffer.occupied_count(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.is_full(), capacity == 0);
    }

    let buffer = RingBuffer::<i32>::new();
    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
    assert_eq!(buffer, RingBuffer::default());
}

#[test]
fn negative_capacity_is_rejected() {
    assert_eq!(RingBuffer::<i32>::with_capacity(-1).err(), Some(Error::NegativeCapacity(-1)));
    assert_eq!(RingBuffer::<i32>::from_values(-314, [1, 2, 3]).err(), Some(Error::NegativeCapacity(-314)));
}

#[test]
fn zero_capacity_rejects_enqueue() {
    let mut buffer = RingBuffer::with_capacity(0).unwrap();
    assert!(matches!(buffer.enqueue(10), Err(Error::EmptyBuffer(_))));
    assert!(matches!(buffer.enqueue_all([1, 2]), Err(Error::EmptyBuffer(_))));
    assert_eq!(buffer.occupied_count(), 0);

    let mut buffer = RingBuffer::new();
    assert!(matches!(buffer.enqueue(10), Err(Error::EmptyBuffer(_))));
}

#[test]
fn zero_capacity_rejects_loading() {
    assert!(matches!(RingBuffer::<i32>::from_values(0, [1, 2, 3]), Err(Error::EmptyBuffer(_))));
    assert!(matches!(RingBuffer::<i32>::from_values(0, Vec::<i32>::new()), Err(Error::EmptyBuffer(_))));
}

#[test]
fn load_converts_values() {
    let values: [i8; 5] = [10, 30, 60, 40, -20];
    let buffer = RingBuffer::<i32>::from_values(5, values).unwrap();
    assert!(buffer.is_full());
    for (index, value) in values.iter().enumerate() {
        assert_eq!(buffer[index], i32::from(*value));
    }

    let buffer = RingBuffer::<i32>::from_values(100, Vec::<i32>::new()).unwrap();
    assert_eq!(buffer.capacity(), 100);
    assert!(buffer.is_empty());
}

#[test]
fn empty_buffer_rejects_dequeue() {
    let mut buffer = RingBuffer::<String>::with_capacity(3).unwrap();
    assert!(matches!(buffer.dequeue(), Err(Error::EmptyBuffer(_))));
    assert!(matches!(buffer.head_mut(), Err(Error::EmptyBuffer(_))));
    assert!(matches!(buffer.tail_mut(), Err(Error::EmptyBuffer(_))));
}

#[test]
fn dequeue_is_first_in_first_out() {
    let mut buffer = RingBuffer::with_capacity(32).unwrap();
    for round in 0..10 {
        buffer.enqueue(round * 2).unwrap();
        buffer.enqueue(round * 2 + 1).unwrap();
        assert_eq!(buffer.dequeue(), Ok(round));
        assert_eq!(buffer.occupied_count(), round as usize + 1);
    }
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), (10..20).collect::<Vec<_>>());
}

#[test]
fn head_and_tail_can_be_overwritten() {
    let mut buffer = RingBuffer::<i32>::from_values(20, 5..15).unwrap();
    for _ in 0..5 {
        buffer.dequeue().unwrap();
    }
    assert_eq!(buffer.head(), Ok(&10));
    assert_eq!(buffer.tail(), Ok(&14));

    *buffer.head_mut().unwrap() = 1000;
    *buffer.tail_mut().unwrap() = 9999;
    *buffer.at_mut(1).unwrap() = 42;
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1000, 42, 12, 13, 9999]);
}

#[test]
fn positional_access_is_bounded_by_the_stored_elements() {
    let mut buffer = RingBuffer::with_capacity(10).unwrap();
    buffer.enqueue_all([1, 2, 3]).unwrap();

    assert_eq!(buffer.at(0), Ok(&1));
    assert_eq!(buffer.at(2), Ok(&3));
    assert_eq!(buffer.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(buffer.at(-1), Err(Error::IndexOutOfRange { index: -1, len: 3 }));
    assert_eq!(buffer.at(101), Err(Error::IndexOutOfRange { index: 101, len: 3 }));
    assert!(buffer.at_mut(5).is_err());
    assert_eq!(buffer.get(3), None);

    let empty = RingBuffer::<i32>::new();
    assert_eq!(empty.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
#[should_panic(expected = "index 3 is out of range")]
fn index_past_the_tail_panics() {
    let buffer = RingBuffer::<i32>::from_values(10, [1, 2, 3]).unwrap();
    let _value = &buffer[3];
}

#[test]
fn copy_is_independent() {
    let mut source = RingBuffer::with_capacity(10).unwrap();
    source.enqueue_all(10..28).unwrap();

    let mut copy = source.clone();
    assert_eq!(copy, source);
    assert_eq!(copy.capacity(), source.capacity());
    assert_eq!(copy.occupied_count(), source.occupied_count());
    assert_eq!(copy.head(), source.head());
    assert_eq!(copy.tail(), source.tail());
    for index in 0..source.len() {
        assert_eq!(copy[index], source[index]);
    }

    copy.enqueue(-1).unwrap();
    *copy.head_mut().unwrap() = 0;
    assert_ne!(copy, source);
    assert_eq!(source.head(), Ok(&18));
    assert_eq!(source.tail(), Ok(&27));

    let copy = source.try_clone().unwrap();
    assert_eq!(copy, source);
}

#[test]
fn assignment_replaces_contents() {
    let source = RingBuffer::<i32>::from_values(10, 0..10).unwrap();

    let mut target = RingBuffer::new();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert!(target.is_full());

    let mut target = RingBuffer::<i32>::from_values(10, [7, 7, 7]).unwrap();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.head(), Ok(&0));
    assert_eq!(source.occupied_count(), 10);
}

#[test]
fn copy_of_an_empty_buffer() {
    let source = RingBuffer::<i32>::new();
    let copy = source.clone();
    assert_eq!(copy.capacity(), 0);
    assert!(copy.is_empty());

    let source = RingBuffer::<i32>::with_capacity(3).unwrap();
    let copy = source.clone();
    assert_eq!(copy.capacity(), 3);
    assert!(copy.is_empty());
}

#[test]
fn equality_ignores_the_physical_layout() {
    let mut wrapped = RingBuffer::with_capacity(3).unwrap();
    wrapped.enqueue_all([0, 1, 2, 3, 4]).unwrap();
    let linear = RingBuffer::<i32>::from_values(3, [2, 3, 4]).unwrap();

    assert_ne!(wrapped.head_index(), linear.head_index());
    assert_eq!(wrapped, linear);
    assert_ne!(linear, RingBuffer::<i32>::from_values(4, [2, 3, 4]).unwrap());
}

#[test]
fn clear_behaves_like_a_fresh_buffer() {
    let mut buffer = RingBuffer::with_capacity(5).unwrap();
    buffer.enqueue_all([10, 30, 60, 40, -20, 7]).unwrap();
    buffer.clear();
    assert!(buffer.is_empty());
    assert!(!buffer.is_full());
    assert_eq!(buffer.capacity(), 5);
    assert_eq!(buffer.to_string(), "[]");
    assert!(matches!(buffer.dequeue(), Err(Error::EmptyBuffer(_))));

    let mut fresh = RingBuffer::with_capacity(5).unwrap();
    for value in [1, 2, 3, 4, 5, 6, 7] {
        buffer.enqueue(value).unwrap();
        fresh.enqueue(value).unwrap();
        assert_eq!(buffer, fresh);
        assert_eq!(buffer.head_index(), fresh.head_index());
        assert_eq!(buffer.tail_index(), fresh.tail_index());
    }
}

#[test]
fn collect_sizes_the_buffer_to_fit() {
    let buffer: RingBuffer<String> = ["Java", "C++", "PHP"].iter().map(|s| s.to_string()).collect();
    assert_eq!(buffer.capacity(), 3);
    assert!(buffer.is_full());
    assert_eq!(buffer.head().map(String::as_str), Ok("Java"));

    let empty: RingBuffer<i32> = std::iter::empty().collect();
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn render_full_and_partial_buffers() {
    let buffer = RingBuffer::<i32>::from_values(5, [10, 30, 60, 40, -20]).unwrap();
    assert_eq!(
        buffer.to_string(),
        "Head: 0 - value: [10]\nTail: 4 - value: [-20]\nSize: 5\nStored elements: 5\n[ 10 30 60 40 -20 ]"
    );

    let mut buffer = RingBuffer::with_capacity(4).unwrap();
    buffer.enqueue_all(["Java", "C++"]).unwrap();
    assert_eq!(
        buffer.to_string(),
        "Head: 0 - value: [Java]\nTail: 1 - value: [C++]\nSize: 4\nStored elements: 2\n[ Java C++ # # ]"
    );
}

#[test]
fn buffer_of_buffers() {
    let element = RingBuffer::<f64>::from_values(5, [0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut outer = RingBuffer::with_capacity(5).unwrap();
    for _ in 0..outer.capacity() {
        outer.enqueue(element.clone()).unwrap();
    }

    let copy = outer.clone();
    assert_eq!(copy, outer);

    let removed = outer.dequeue().unwrap();
    assert_eq!(removed, element);
    assert_eq!(outer.occupied_count(), 4);
    assert!(!outer.is_full());
    assert_eq!(copy.occupied_count(), 5);

    let total: f64 = outer.iter().flat_map(|inner| inner.iter()).sum();
    assert_eq!(total, 40.0);
}
