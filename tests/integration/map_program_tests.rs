use super::{build_test_logic, TestEvent, TestModel};
use mvu_compose::{map_program, Effect, Logic, Program, TestDispatcher};

#[derive(Clone, Debug, PartialEq)]
enum ParentEvent {
    Counter(TestEvent),
}

#[test]
fn given_a_program_when_mapped_should_leave_initial_state_untouched() {
    let program = map_program(build_test_logic().starting_at(4).build(), ParentEvent::Counter);

    let (state, effect) = program.init();

    assert_eq!(state, TestModel { count: 4 });
    assert!(effect.is_none());
}

#[test]
fn given_an_initial_effect_when_mapped_should_transform_its_messages() {
    let recorder = TestDispatcher::new();
    let program = map_program(
        build_test_logic()
            .given_an_initial_effect(Effect::just(TestEvent::Increment))
            .build(),
        ParentEvent::Counter,
    );

    let (_, effect) = program.init();
    effect.unwrap().execute(&recorder.dispatcher());

    assert_eq!(recorder.take(), vec![ParentEvent::Counter(TestEvent::Increment)]);
}

#[test]
fn given_a_mapped_program_when_updated_should_receive_child_messages_and_map_the_effect() {
    let recorder = TestDispatcher::new();
    let program = map_program(
        build_test_logic()
            .given_an_on_increment_side_effect(|| Some(Effect::just(TestEvent::Reset)))
            .build(),
        ParentEvent::Counter,
    );

    let (state, _) = program.init();
    let (state, effect) = program.update(TestEvent::Increment, &state);
    effect.unwrap().execute(&recorder.dispatcher());

    assert_eq!(state, TestModel { count: 1 });
    assert_eq!(recorder.take(), vec![ParentEvent::Counter(TestEvent::Reset)]);
}

#[test]
fn given_a_mapped_program_when_updated_without_effect_should_return_no_effect() {
    let program = map_program(build_test_logic().build(), ParentEvent::Counter);

    let (state, _) = program.init();
    let (_, effect) = program.update(TestEvent::Reset, &state);

    assert!(effect.is_none());
}

#[test]
fn given_a_mapped_program_when_view_callback_invoked_should_dispatch_transformed_message() {
    let recorder = TestDispatcher::new();
    let program = map_program(build_test_logic().starting_at(2).build(), ParentEvent::Counter);

    let (state, _) = program.init();
    let props = program.view(&state, &recorder.dispatcher());
    (props.on_increment)();

    assert_eq!(props.count, 2);
    assert_eq!(recorder.take(), vec![ParentEvent::Counter(TestEvent::Increment)]);
}

#[test]
fn given_a_program_with_done_when_mapped_should_keep_done() {
    let recorder = TestDispatcher::new();
    let program = map_program(
        build_test_logic()
            .starting_at(9)
            .given_a_teardown(|count| {
                assert_eq!(count, 9);
                Some(Effect::just(TestEvent::Reset))
            })
            .build(),
        ParentEvent::Counter,
    );

    assert!(program.has_done());

    let (state, _) = program.init();
    let effect = program.done(&state);
    effect.unwrap().execute(&recorder.dispatcher());

    assert_eq!(recorder.take(), vec![ParentEvent::Counter(TestEvent::Reset)]);
}

#[test]
fn given_a_program_without_done_when_mapped_should_have_no_done() {
    let program = map_program(build_test_logic().build(), ParentEvent::Counter);

    let (state, _) = program.init();

    assert!(!program.has_done());
    assert!(program.done(&state).is_none());
}

#[test]
fn given_a_mapped_program_when_mapped_again_should_compose_transforms() {
    let recorder = TestDispatcher::new();
    let program = map_program(
        map_program(
            build_test_logic()
                .given_an_initial_effect(Effect::just(TestEvent::Increment))
                .build(),
            ParentEvent::Counter,
        ),
        |event: ParentEvent| format!("{event:?}"),
    );

    let (_, effect) = program.init();
    effect.unwrap().execute(&recorder.dispatcher());

    assert_eq!(recorder.take(), vec!["Counter(Increment)".to_string()]);
}
