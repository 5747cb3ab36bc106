use mvu_compose::{Dispatcher, Effect, Logic, Program};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TestEvent {
    Increment,
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestModel {
    pub(crate) count: i32,
}

pub(crate) struct TestProps {
    pub(crate) count: i32,
    pub(crate) on_increment: Box<dyn Fn() + Send>,
}

pub(crate) struct TestLogic {
    pub(crate) initial_count: i32,
    pub(crate) initial_effects: Box<dyn InitialEffectsDependency + Send>,
    pub(crate) effects: Box<dyn EffectsDependency + Send>,
    pub(crate) teardown: Option<Box<dyn TeardownDependency + Send>>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait InitialEffectsDependency {
    fn on_init(&self) -> Option<Effect<TestEvent>>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait EffectsDependency {
    fn on_increment_side_effect(&self) -> Option<Effect<TestEvent>>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait TeardownDependency {
    fn on_done(&self, count: i32) -> Option<Effect<TestEvent>>;
}

impl Logic for TestLogic {
    type Msg = TestEvent;
    type Emit = TestEvent;
    type State = TestModel;

    fn init(&self) -> (TestModel, Option<Effect<TestEvent>>) {
        let model = TestModel {
            count: self.initial_count,
        };
        (model, self.initial_effects.on_init())
    }

    fn update(&self, event: TestEvent, model: &TestModel) -> (TestModel, Option<Effect<TestEvent>>) {
        match event {
            TestEvent::Increment => {
                let new_model = TestModel {
                    count: model.count + 1,
                };
                (new_model, self.effects.on_increment_side_effect())
            }
            TestEvent::Reset => (TestModel { count: 0 }, None),
        }
    }

    fn has_done(&self) -> bool {
        self.teardown.is_some()
    }

    fn done(&self, model: &TestModel) -> Option<Effect<TestEvent>> {
        self.teardown
            .as_ref()
            .and_then(|teardown| teardown.on_done(model.count))
    }
}

impl Program for TestLogic {
    type View = TestProps;

    fn view(&self, model: &TestModel, dispatcher: &Dispatcher<TestEvent>) -> TestProps {
        let dispatcher = dispatcher.clone();
        TestProps {
            count: model.count,
            on_increment: Box::new(move || {
                dispatcher.dispatch(TestEvent::Increment);
            }),
        }
    }
}
