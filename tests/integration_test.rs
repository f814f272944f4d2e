use collectable_attrs::observer::RecordingObserver;
use collectable_attrs::{
    AttributeError, AttributeFactory, Collectable, CollectableAttribute, EventKind,
    OrderingCounter, StateVariable,
};

/// Walks a state variable through a full set / disable / reset cycle.
#[test]
fn test_state_variable_cycle() {
    let mut sv = StateVariable::new("score").expect("valid name");
    assert!(!sv.is_set());
    assert_eq!(sv.value(), Err(AttributeError::UnsetValue("score".into())));

    sv.assign(5);
    assert!(sv.is_set());
    assert_eq!(sv.value(), Ok(Some(&5)));

    sv.enable(false);
    sv.assign(10);
    assert!(sv.is_set());
    assert_eq!(sv.value(), Ok(Some(&5)), "write while disabled must be dropped");

    sv.reset();
    assert!(!sv.is_set());
    assert!(sv.value().unwrap_err().is_unset_value());
}

#[test]
fn test_copy_does_not_alias_compound_values() {
    let original = CollectableAttribute::with_value("weight", vec![1, 2, 3]).unwrap();
    let mut copied = original.duplicate().expect("counter not exhausted");
    copied.value_mut().expect("copied value").push(4);

    assert_eq!(original.value(), Ok(Some(&vec![1, 2, 3])));
    assert_eq!(copied.value(), Ok(Some(&vec![1, 2, 3, 4])));
    assert_eq!(copied.name(), original.name());
    assert_eq!(copied.doc(), original.doc());
}

/// A disabled state variable ignores writes through every public route, and
/// a reset through the trait empties its slot.
#[test]
fn test_gate_holds_through_every_public_route() {
    let mut sv = StateVariable::<u32>::disabled("score").unwrap();
    sv.assign(1);
    sv.set_value(2);
    {
        let as_trait: &mut dyn Collectable<Value = u32> = &mut sv;
        as_trait.assign(3);
        as_trait.set_value(4);
    }
    let mut boxed: Box<dyn Collectable<Value = u32>> = Box::new(sv);
    boxed.assign(5);
    assert!(!boxed.is_set());
    assert_eq!(boxed.base().raw_value(), None);

    let mut sv = StateVariable::<u32>::new("score").unwrap();
    sv.assign(6);
    sv.enable(false);
    sv.assign(7);
    assert_eq!(sv.get(), Ok(&6));
    Collectable::reset(&mut sv);
    assert!(!sv.is_set());
    assert_eq!(sv.base().raw_value(), None);
    assert!(sv.get_mut().is_err());
}

#[test]
fn test_copy_of_disabled_variable_is_enabled() {
    let mut sv = StateVariable::new("score").unwrap();
    sv.assign(vec![1.0, 2.0]);
    sv.enable(false);

    let mut copied = sv.duplicate().unwrap();
    assert!(copied.is_enabled());
    assert_eq!(copied.get(), Ok(&vec![1.0, 2.0]));
    copied.assign(vec![3.0]);
    assert_eq!(copied.get(), Ok(&vec![3.0]));
    assert_eq!(sv.get(), Ok(&vec![1.0, 2.0]));
}

#[test]
fn test_private_name_is_rejected() {
    let err = CollectableAttribute::<u8>::new("_private").unwrap_err();
    assert!(err.is_invalid_name());

    let err = StateVariable::<u8>::builder()
        .name("_private")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_name());
}

#[test]
fn test_base_reset_keeps_stale_slot() {
    let mut attr = CollectableAttribute::new("weight").unwrap();
    attr.assign(3.5);
    attr.reset();
    assert!(!attr.is_set());
    assert_eq!(attr.raw_value(), Some(&3.5));
    assert_eq!(attr.to_string(), "weight");
}

#[test]
fn test_auto_indices_follow_construction_order() {
    let counter = OrderingCounter::new();
    let indices: Vec<u64> = ["a", "b", "c", "d"]
        .iter()
        .map(|name| {
            CollectableAttribute::<u8>::builder()
                .name(*name)
                .counter(counter.clone())
                .build()
                .unwrap()
                .index()
        })
        .collect();
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(indices, vec![1, 2, 3, 4]);
}

#[test]
fn test_global_counter_increases_across_constructions() {
    let first = CollectableAttribute::<u8>::new("first").unwrap();
    let second = StateVariable::<u8>::new("second").unwrap();
    let third = CollectableAttribute::<u8>::new("third").unwrap();
    assert!(first.index() < second.index());
    assert!(second.index() < third.index());
}

/// A collection holds attributes of mixed kinds behind the trait and lists
/// them by index.
#[test]
fn test_mixed_attributes_behind_the_trait() {
    let factory = AttributeFactory::new(OrderingCounter::new());
    let mut attrs: Vec<Box<dyn Collectable<Value = f64>>> = vec![
        Box::new(factory.state_variable::<f64>().name("errors").enabled(false).build().unwrap()),
        Box::new(factory.collectable::<f64>().name("C").value(1.0).index(0).build().unwrap()),
        Box::new(factory.state_variable::<f64>().name("trained").build().unwrap()),
    ];

    for attr in attrs.iter_mut() {
        attr.assign(0.5);
    }
    attrs.sort_by_key(|attr| attr.index());

    let listing: Vec<(Option<&str>, bool)> = attrs
        .iter()
        .map(|attr| (attr.name(), attr.is_set()))
        .collect();
    assert_eq!(
        listing,
        vec![
            (Some("C"), true),
            (Some("errors"), false),
            (Some("trained"), true),
        ]
    );

    for attr in attrs.iter_mut() {
        attr.reset();
    }
    assert!(attrs.iter().all(|attr| !attr.is_set()));
    // Only the base attribute still answers reads after reset.
    assert_eq!(attrs[0].value(), Ok(Some(&0.5)));
    assert!(attrs[2].value().is_err());
}

#[test]
fn test_factory_observer_sees_discarded_writes() {
    let recorder = RecordingObserver::new();
    let factory = AttributeFactory::new(OrderingCounter::new()).with_observer(recorder.handle());
    let mut sv = factory
        .state_variable::<u32>()
        .name("predictions")
        .enabled(false)
        .build()
        .unwrap();
    sv.assign(1);
    sv.enable(true);
    sv.assign(2);

    let events = recorder.events();
    assert!(events
        .iter()
        .all(|event| event.name.as_deref() == Some("predictions")));
    assert_eq!(
        recorder.kinds(),
        vec![
            EventKind::Initialized {
                state_variable: true
            },
            EventKind::Discarded,
            EventKind::Enabled,
            EventKind::Stored { init: false },
        ]
    );
}

/// Indices stay unique when attributes are declared from several threads.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_construction_yields_unique_indices() {
    let counter = OrderingCounter::new();
    let mut handles = Vec::new();
    for task in 0..8 {
        let counter = counter.clone();
        handles.push(tokio::spawn(async move {
            (0..50)
                .map(|i| {
                    StateVariable::<u8>::builder()
                        .name(format!("state_{task}_{i}"))
                        .counter(counter.clone())
                        .build()
                        .unwrap()
                        .index()
                })
                .collect::<Vec<u64>>()
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.await.expect("task panicked"));
    }
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 400);
    assert_eq!(all.first(), Some(&1));
    assert_eq!(all.last(), Some(&400));
}
