//! Parameter structures for glam operations.
//!
//! These are plain structs shared by every front end. Interface layers (the
//! CLI's clap arguments, for instance) convert into them with `From` impls so
//! the core never depends on a particular argument parser.
//!
//! The store accepts whatever it is given; callers that take user input run
//! [`CreateEvent::validate`] first.

use jiff::civil::Date;

use crate::{
    error::{GlamError, Result},
    models::ServiceCategory,
};

/// Parameters for creating a plan event.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEvent {
    pub name: String,
    pub date: Date,
    pub goal_image_id: Option<String>,
}

impl CreateEvent {
    /// Event without a goal image.
    pub fn new(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            date,
            goal_image_id: None,
        }
    }

    /// Sets the portfolio item used as the event's hero image.
    pub fn with_goal_image(mut self, item_id: impl Into<String>) -> Self {
        self.goal_image_id = Some(item_id.into());
        self
    }

    /// Checks user-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `GlamError::InvalidInput` if the name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GlamError::invalid_input("name").with_reason("must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for adding a checklist item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChecklistItem {
    pub event_id: String,
    pub text: String,
    pub category: Option<ServiceCategory>,
}

impl NewChecklistItem {
    /// Checks user-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `GlamError::InvalidInput` if the text is blank.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(GlamError::invalid_input("text").with_reason("must not be empty"));
        }
        Ok(())
    }
}
