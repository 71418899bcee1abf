//! Form state: owns the mutable UI values and drives the pure generator.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::entropy::IndexSource;
use crate::pass::{
    self, CharacterClass, ClassSet, GenerateError, GeneratedPassword, GenerationRequest,
    MAX_LENGTH, MIN_LENGTH,
};
use crate::settings::{FormMode, Settings};

#[derive(Debug, Clone)]
pub struct Form {
    length: usize,
    classes: ClassSet,
    mode: FormMode,
    password: Option<GeneratedPassword>,
}

impl Form {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length: settings.length.clamp(MIN_LENGTH, MAX_LENGTH),
            classes: settings.classes,
            mode: settings.mode,
            password: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamped to the slider range.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn shorter(&mut self) {
        self.set_length(self.length.saturating_sub(1));
    }

    pub fn longer(&mut self) {
        self.set_length(self.length + 1);
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Flip a class toggle. Fixed mode has no toggles.
    pub fn toggle(&mut self, class: CharacterClass) {
        if self.mode == FormMode::Classes {
            self.classes.toggle(class);
        }
    }

    /// Immutable request for the current form values.
    pub fn request(&self) -> GenerationRequest {
        let enabled = match self.mode {
            FormMode::Classes => self.classes,
            FormMode::Fixed => ClassSet::all(),
        };
        GenerationRequest::new(self.length, enabled)
    }

    /// Generate and store a new password. On error the previous one is kept.
    pub fn generate<S>(&mut self, source: &mut S) -> Result<&GeneratedPassword, GenerateError>
    where
        S: IndexSource + ?Sized,
    {
        let password = pass::generate(&self.request(), source)?;
        Ok(&*self.password.insert(password))
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn copy<C>(&self, clipboard: &mut C) -> Result<(), ClipboardError>
    where
        C: Clipboard + ?Sized,
    {
        match &self.password {
            Some(password) if !password.is_empty() => clipboard.copy(password.as_str()),
            _ => Err(ClipboardError::NothingToCopy),
        }
    }

    /// Write the form values back into settings for saving.
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.length = self.length;
        settings.classes = self.classes;
        settings.mode = self.mode;
    }
}
