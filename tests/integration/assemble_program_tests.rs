use std::cell::RefCell;

use super::{build_test_logic, TestEvent, TestLogic, TestModel};
use mvu_compose::{assemble_program, Assembly, Dispatcher, Effect, Logic, Program, TestDispatcher};

#[derive(Debug, PartialEq)]
struct DataOptions {
    seed: i32,
}

#[derive(Debug, PartialEq)]
struct ProvidedData {
    start: i32,
}

#[derive(Debug, PartialEq)]
struct LogicOptions {
    offset: i32,
}

#[derive(Debug, PartialEq)]
struct ViewOptions {
    label: &'static str,
}

#[test]
fn given_an_assembly_should_wire_data_logic_and_view_with_their_options() {
    let calls = RefCell::new(Vec::new());
    let recorder = TestDispatcher::new();

    let program = assemble_program(Assembly {
        data: |options: DataOptions| {
            calls.borrow_mut().push("data");
            assert_eq!(options, DataOptions { seed: 40 });
            ProvidedData { start: options.seed }
        },
        data_options: DataOptions { seed: 40 },
        logic: |data: ProvidedData, options: LogicOptions| {
            calls.borrow_mut().push("logic");
            assert_eq!(data, ProvidedData { start: 40 });
            assert_eq!(options, LogicOptions { offset: 2 });
            build_test_logic().starting_at(data.start + options.offset).build()
        },
        logic_options: LogicOptions { offset: 2 },
        view: |model: &TestModel, _: &Dispatcher<TestEvent>, options: &ViewOptions| {
            calls.borrow_mut().push("view");
            assert_eq!(options, &ViewOptions { label: "count" });
            format!("{}={}", options.label, model.count)
        },
        view_options: ViewOptions { label: "count" },
    });

    let (state, _) = program.init();
    let rendered = program.view(&state, &recorder.dispatcher());

    assert_eq!(rendered, "count=42");
    assert_eq!(*calls.borrow(), vec!["data", "logic", "view"]);
}

#[test]
fn given_an_assembled_program_should_keep_the_logic_as_returned() {
    let recorder = TestDispatcher::new();
    let program = assemble_program(Assembly {
        data: |_: ()| 7,
        data_options: (),
        logic: |start: i32, _: ()| {
            build_test_logic()
                .starting_at(start)
                .given_an_on_increment_side_effect(|| Some(Effect::just(TestEvent::Reset)))
                .given_a_teardown(|_| None)
                .build()
        },
        logic_options: (),
        view: |model: &TestModel, _: &Dispatcher<TestEvent>, _: &()| model.count,
        view_options: (),
    });

    let (state, _) = program.init();
    let (state, effect) = program.update(TestEvent::Increment, &state);
    effect.unwrap().execute(&recorder.dispatcher());

    assert_eq!(program.logic().initial_count, 7);
    assert_eq!(state, TestModel { count: 8 });
    assert_eq!(recorder.take(), vec![TestEvent::Reset]);
    assert!(program.has_done());
}

#[test]
fn given_logic_with_its_own_view_should_use_the_assembled_view_instead() {
    let recorder = TestDispatcher::new();
    let program = assemble_program(Assembly {
        data: |_: ()| (),
        data_options: (),
        logic: |_: (), _: ()| -> TestLogic { build_test_logic().build() },
        logic_options: (),
        view: |_: &TestModel, dispatcher: &Dispatcher<TestEvent>, label: &String| {
            dispatcher.dispatch(TestEvent::Increment);
            label.clone()
        },
        view_options: String::from("assembled"),
    });

    let (state, _) = program.init();

    assert_eq!(program.view(&state, &recorder.dispatcher()), "assembled");
    assert_eq!(program.view_options(), "assembled");
    assert_eq!(recorder.take(), vec![TestEvent::Increment]);
}
