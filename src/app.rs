//! Application state for the calculator TUI.

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::constants::{presets, ui::MAX_FIELD_LEN};
use crate::engine::{
    distance_to_steps, steps_per_mile, steps_to_distance, DistanceToSteps, StepsPerMile, StepsToDistance,
};
use crate::error::ValidationError;
use crate::forms::{DistanceForm, StepsForm, StrideFields, StrideForm};
use crate::input::{self, FormAction, InputContext, InputHandler, InputResult};
use crate::narrative::{self, DistanceNarrative, StepsNarrative, StrideNarrative};
use crate::types::{Activity, StrideMethod};

/// Calculator tabs, one per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Steps → distance, calories and time.
    #[default]
    Steps,
    /// Distance → steps.
    Distance,
    /// Stride length and steps per mile.
    Stride,
}

impl Tab {
    /// All tabs in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Steps, Self::Distance, Self::Stride]
    }

    /// Tab header text.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Steps => "Steps → Distance",
            Self::Distance => "Distance → Steps",
            Self::Stride => "Steps per Mile",
        }
    }

    /// Position in [`Tab::all`].
    pub const fn index(self) -> usize {
        match self {
            Self::Steps => 0,
            Self::Distance => 1,
            Self::Stride => 2,
        }
    }

    /// The tab to the right, wrapping.
    pub const fn next(self) -> Self {
        match self {
            Self::Steps => Self::Distance,
            Self::Distance => Self::Stride,
            Self::Stride => Self::Steps,
        }
    }

    /// The tab to the left, wrapping.
    pub const fn prev(self) -> Self {
        match self {
            Self::Steps => Self::Stride,
            Self::Distance => Self::Steps,
            Self::Stride => Self::Distance,
        }
    }
}

/// A form field on one of the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Field {
    Steps,
    Distance,
    DistanceUnit,
    Activity,
    StrideMethod,
    HeightFeet,
    HeightInches,
    CustomStride,
    StrideUnit,
}

impl Field {
    /// Whether the field takes typed text rather than cycling a choice.
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::Steps | Self::Distance | Self::HeightFeet | Self::HeightInches | Self::CustomStride
        )
    }

    /// Label shown left of the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Distance => "Distance",
            Self::DistanceUnit => "Unit",
            Self::Activity => "Activity",
            Self::StrideMethod => "Stride",
            Self::HeightFeet => "Height (ft)",
            Self::HeightInches => "Height (in)",
            Self::CustomStride => "Stride length",
            Self::StrideUnit => "Stride unit",
        }
    }
}

/// A calculation result paired with its narrative text.
#[derive(Debug, Clone)]
pub struct Outcome<R, N> {
    /// Engine output.
    pub result: R,
    /// Text generated from `result`.
    pub narrative: N,
}

/// Top-level TUI state: one form and one last result per tab.
pub struct App {
    /// Active tab.
    pub tab: Tab,
    /// Index into [`App::fields`] for the active tab.
    pub focus: usize,
    /// Steps→Distance form.
    pub steps_form: StepsForm,
    /// Distance→Steps form.
    pub distance_form: DistanceForm,
    /// Stride form.
    pub stride_form: StrideForm,
    /// Last Steps→Distance result.
    pub steps_outcome: Option<Outcome<StepsToDistance, StepsNarrative>>,
    /// Last Distance→Steps result.
    pub distance_outcome: Option<Outcome<DistanceToSteps, DistanceNarrative>>,
    /// Last stride result.
    pub stride_outcome: Option<Outcome<StepsPerMile, StrideNarrative>>,
    /// Index of the last preset picked on each tab, for highlighting.
    pub active_preset: [Option<usize>; 3],
    /// Validation message shown in the error modal.
    pub error_message: Option<String>,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Loaded configuration.
    pub config: Config,
    should_quit: bool,
    handlers: Vec<Box<dyn InputHandler>>,
}

impl App {
    /// Create the app with forms pre-filled from `config`.
    pub fn new(config: Config) -> Self {
        let stride = StrideFields::with_height(config.default_height);
        let activity = config.default_activity;
        Self {
            tab: Tab::default(),
            focus: 0,
            steps_form: StepsForm { activity, stride: stride.clone(), ..StepsForm::default() },
            distance_form: DistanceForm { activity, stride: stride.clone(), ..DistanceForm::default() },
            stride_form: StrideForm { activity, stride },
            steps_outcome: None,
            distance_outcome: None,
            stride_outcome: None,
            active_preset: [None; 3],
            error_message: None,
            show_help: false,
            config,
            should_quit: false,
            handlers: input::default_handlers(),
        }
    }

    /// Whether the event loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Fields shown on the active tab, top to bottom.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = match self.tab {
            Tab::Steps => vec![Field::Steps],
            Tab::Distance => vec![Field::Distance, Field::DistanceUnit],
            Tab::Stride => Vec::new(),
        };
        fields.extend([Field::Activity, Field::StrideMethod]);
        match self.stride_fields().method {
            StrideMethod::Height => fields.extend([Field::HeightFeet, Field::HeightInches]),
            StrideMethod::Custom => fields.extend([Field::CustomStride, Field::StrideUnit]),
        }
        fields
    }

    /// The field with keyboard focus.
    pub fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Display value of a field on the active tab.
    pub fn field_value(&self, field: Field) -> String {
        let stride = self.stride_fields();
        match field {
            Field::Steps => self.steps_form.steps.clone(),
            Field::Distance => self.distance_form.distance.clone(),
            Field::DistanceUnit => self.distance_form.unit.name().to_string(),
            Field::Activity => self.activity().name().to_string(),
            Field::StrideMethod => stride.method.name().to_string(),
            Field::HeightFeet => stride.height_feet.clone(),
            Field::HeightInches => stride.height_inches.clone(),
            Field::CustomStride => stride.custom_stride.clone(),
            Field::StrideUnit => stride.stride_unit.name().to_string(),
        }
    }

    /// Preset values offered on the active tab.
    pub const fn presets(&self) -> &'static [&'static str] {
        match self.tab {
            Tab::Steps => &presets::STEPS,
            Tab::Distance => &presets::DISTANCES,
            Tab::Stride => &[],
        }
    }

    /// Route a key through the input handlers and apply the result.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = InputContext {
            tab: self.tab,
            show_help: self.show_help,
            has_error: self.error_message.is_some(),
            focused_text: self.focused_field().is_text(),
        };

        match input::dispatch(&mut self.handlers, key, &ctx) {
            InputResult::Quit => self.quit(),
            InputResult::Dismiss => {
                self.error_message = None;
                self.show_help = false;
            }
            InputResult::ToggleHelp => self.show_help = !self.show_help,
            InputResult::SwitchTab(tab) => self.switch_tab(tab),
            InputResult::Form(action) => self.apply(action),
            InputResult::Consumed | InputResult::Ignored => {}
        }
    }

    /// Activate `tab` with focus on its first field.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.focus = 0;
    }

    fn apply(&mut self, action: FormAction) {
        let count = self.fields().len();
        match action {
            FormAction::NextField => self.focus = (self.focus + 1) % count,
            FormAction::PrevField => self.focus = (self.focus + count - 1) % count,
            FormAction::Insert(c) => {
                if let Some(text) = self.focused_text_mut() {
                    if text.len() < MAX_FIELD_LEN {
                        text.push(c);
                    }
                }
            }
            FormAction::Backspace => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            FormAction::Clear => {
                if let Some(text) = self.focused_text_mut() {
                    text.clear();
                }
            }
            FormAction::Cycle => self.cycle(),
            FormAction::Calculate => self.calculate(),
            FormAction::Preset(index) => self.apply_preset(index),
        }
    }

    fn apply_preset(&mut self, index: usize) {
        let Some(value) = self.presets().get(index) else {
            return;
        };
        match self.tab {
            Tab::Steps => self.steps_form.steps = (*value).to_string(),
            Tab::Distance => self.distance_form.distance = (*value).to_string(),
            Tab::Stride => return,
        }
        self.active_preset[self.tab.index()] = Some(index);
    }

    /// Flip the focused selection field to its other option.
    fn cycle(&mut self) {
        let field = self.focused_field();
        match field {
            Field::DistanceUnit => self.distance_form.unit = self.distance_form.unit.next(),
            Field::Activity => {
                let next = self.activity().next();
                *self.activity_mut() = next;
            }
            Field::StrideMethod => {
                let stride = self.stride_fields_mut();
                stride.method = stride.method.next();
            }
            Field::StrideUnit => {
                let stride = self.stride_fields_mut();
                stride.stride_unit = stride.stride_unit.next();
            }
            _ => {}
        }
    }

    /// Run the active tab's calculation. Validation failures open the error
    /// modal and leave the previous result in place.
    pub fn calculate(&mut self) {
        let default_height = self.config.default_height;
        let outcome = match self.tab {
            Tab::Steps => steps_to_distance(&self.steps_form.to_input(default_height)).map(|result| {
                tracing::info!(
                    "steps→distance: {} {} steps = {} mi",
                    result.steps,
                    result.activity.key(),
                    result.miles_display()
                );
                let narrative = narrative::describe_steps(&result);
                self.steps_outcome = Some(Outcome { result, narrative });
            }),
            Tab::Distance => distance_to_steps(&self.distance_form.to_input(default_height)).map(|result| {
                tracing::info!(
                    "distance→steps: {} {} {} = {} steps",
                    result.distance,
                    result.unit.name(),
                    result.activity.key(),
                    result.steps
                );
                let narrative = narrative::describe_distance(&result);
                self.distance_outcome = Some(Outcome { result, narrative });
            }),
            Tab::Stride => steps_per_mile(&self.stride_form.to_input(default_height)).map(|result| {
                tracing::info!(
                    "steps per mile: {} stride {:.2} ft = {} steps/mi",
                    result.activity.key(),
                    result.stride.get(),
                    result.steps_per_mile
                );
                let narrative = narrative::describe_stride(&result);
                self.stride_outcome = Some(Outcome { result, narrative });
            }),
        };

        if let Err(err) = outcome {
            self.report(err);
        }
    }

    fn report(&mut self, err: ValidationError) {
        tracing::warn!("rejected {} input on {:?} tab: {}", err.field(), self.tab, err);
        self.error_message = Some(err.to_string());
    }

    fn activity(&self) -> Activity {
        match self.tab {
            Tab::Steps => self.steps_form.activity,
            Tab::Distance => self.distance_form.activity,
            Tab::Stride => self.stride_form.activity,
        }
    }

    fn activity_mut(&mut self) -> &mut Activity {
        match self.tab {
            Tab::Steps => &mut self.steps_form.activity,
            Tab::Distance => &mut self.distance_form.activity,
            Tab::Stride => &mut self.stride_form.activity,
        }
    }

    /// Stride fields of the active tab's form.
    pub const fn stride_fields(&self) -> &StrideFields {
        match self.tab {
            Tab::Steps => &self.steps_form.stride,
            Tab::Distance => &self.distance_form.stride,
            Tab::Stride => &self.stride_form.stride,
        }
    }

    fn stride_fields_mut(&mut self) -> &mut StrideFields {
        match self.tab {
            Tab::Steps => &mut self.steps_form.stride,
            Tab::Distance => &mut self.distance_form.stride,
            Tab::Stride => &mut self.stride_form.stride,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        let field = self.focused_field();
        match field {
            Field::Steps => Some(&mut self.steps_form.steps),
            Field::Distance => Some(&mut self.distance_form.distance),
            Field::HeightFeet => Some(&mut self.stride_fields_mut().height_feet),
            Field::HeightInches => Some(&mut self.stride_fields_mut().height_inches),
            Field::CustomStride => Some(&mut self.stride_fields_mut().custom_stride),
            _ => None,
        }
    }
}
