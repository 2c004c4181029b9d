use crate::form::{Field, FormState, ProductForm, ProductType};
use crate::service::{SubmissionOutcome, SubmissionService};
use crate::ui::worker::{UiCommand, UiCommandSender};
use std::sync::Arc;

/// What currently receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Size),
        Focus::Field(Field::Type),
        Focus::Submit,
    ];

    fn step(self, forward: bool) -> Focus {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    form: ProductForm,
    endpoint: String,
    commands: Option<UiCommandSender>,
    animation_tick: u8,
}

impl App {
    pub fn new(form: ProductForm, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Field(Field::Name),
            form,
            endpoint: endpoint.into(),
            commands: None,
            animation_tick: 0,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn service(&self) -> Arc<dyn SubmissionService> {
        self.form.service()
    }

    pub fn form_state(&self) -> &FormState {
        self.form.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if self.form.state().is_sending() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Moves focus; the field being left is blurred.
    pub fn move_focus(&mut self, forward: bool) {
        if let Focus::Field(field) = self.focus {
            self.form.blur(field);
        }
        self.focus = self.focus.step(forward);
    }

    pub fn type_char(&mut self, ch: char) {
        match self.focus {
            Focus::Field(Field::Type) if ch == ' ' => self.cycle_type(true),
            Focus::Field(field @ (Field::Name | Field::Size)) => {
                let mut value = self.form.state().fields.get(field).to_string();
                value.push(ch);
                self.form.edit(field, value);
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Field(field @ (Field::Name | Field::Size)) => {
                let mut value = self.form.state().fields.get(field).to_string();
                value.pop();
                self.form.edit(field, value);
            }
            Focus::Field(Field::Type) => self.form.edit(Field::Type, ""),
            Focus::Submit => {}
        }
    }

    pub fn cycle_type(&mut self, forward: bool) {
        if self.focus != Focus::Field(Field::Type) {
            return;
        }
        let next = ProductType::cycle(&self.form.state().fields.product_type, forward);
        self.form.edit(Field::Type, next);
    }

    /// Presses Submit. The request itself runs on the submission worker.
    pub fn submit(&mut self) {
        let Some(pending) = self.form.begin_submit() else {
            return;
        };
        let attempt = pending.attempt;
        let sent = match &self.commands {
            Some(commands) => commands.send(UiCommand::Submit(pending)).is_ok(),
            None => false,
        };
        if !sent {
            // Nothing went over the wire, so there is no outcome to show.
            tracing::error!(attempt, "Submission worker unavailable, request not sent");
            self.form.abandon(attempt);
        }
    }

    pub fn on_submission_finished(&mut self, attempt: u64, outcome: SubmissionOutcome) {
        self.form.settle(attempt, outcome);
        if self.form.state().is_saved() {
            self.focus = Focus::Field(Field::Name);
        }
    }

    pub fn reset(&mut self) {
        if self.form.state().is_sending() {
            if let Some(commands) = &self.commands {
                let _ = commands.send(UiCommand::CancelAll);
            }
        }
        self.form.reset();
        self.focus = Focus::Field(Field::Name);
        self.animation_tick = 0;
    }
}
