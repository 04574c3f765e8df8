//! The venture record and the editable field set used to create or edit one.

use serde::{Deserialize, Serialize};

use super::reactions::{ReactionKind, Reactions};
use crate::domain::foundation::{ValidationError, VentureId};

/// One narrated venture case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venture {
    pub id: VentureId,
    /// Lesson title shown on the story card.
    pub title: String,
    pub venture_name: String,
    pub year_launched: i32,
    /// Absent while the venture is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_closed: Option<i32>,
    pub background_story: String,
    pub traction_achieved: String,
    /// Why it failed.
    pub autopsy: String,
    pub lessons_gained: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub views: u64,
    pub reactions: Reactions,
}

impl Venture {
    /// Builds a fresh record from form fields with zeroed counters.
    pub fn create(id: VentureId, fields: NewVenture) -> Self {
        Self {
            id,
            title: fields.title,
            venture_name: fields.venture_name,
            year_launched: fields.year_launched,
            year_closed: fields.year_closed,
            background_story: fields.background_story,
            traction_achieved: fields.traction_achieved,
            autopsy: fields.autopsy,
            lessons_gained: fields.lessons_gained,
            animation: fields.animation,
            product_link: fields.product_link,
            is_active: fields.is_active,
            views: 0,
            reactions: Reactions::zeroed(),
        }
    }

    /// Overwrites the editable fields, keeping id, views and reactions.
    pub fn apply(&mut self, fields: NewVenture) {
        let NewVenture {
            title,
            venture_name,
            year_launched,
            year_closed,
            background_story,
            traction_achieved,
            autopsy,
            lessons_gained,
            animation,
            product_link,
            is_active,
        } = fields;

        self.title = title;
        self.venture_name = venture_name;
        self.year_launched = year_launched;
        self.year_closed = year_closed;
        self.background_story = background_story;
        self.traction_achieved = traction_achieved;
        self.autopsy = autopsy;
        self.lessons_gained = lessons_gained;
        self.animation = animation;
        self.product_link = product_link;
        self.is_active = is_active;
    }

    /// Editable fields of this record, as the edit form would load them.
    pub fn to_fields(&self) -> NewVenture {
        NewVenture {
            title: self.title.clone(),
            venture_name: self.venture_name.clone(),
            year_launched: self.year_launched,
            year_closed: self.year_closed,
            background_story: self.background_story.clone(),
            traction_achieved: self.traction_achieved.clone(),
            autopsy: self.autopsy.clone(),
            lessons_gained: self.lessons_gained.clone(),
            animation: self.animation.clone(),
            product_link: self.product_link.clone(),
            is_active: self.is_active,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.year_closed.is_none()
    }

    pub fn total_reactions(&self) -> u64 {
        self.reactions.total()
    }

    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    pub fn record_reaction(&mut self, kind: ReactionKind) {
        self.reactions.increment(kind);
    }

    /// Same checks as [`NewVenture::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(
            &self.title,
            &self.venture_name,
            self.year_launched,
            self.year_closed,
        )
    }
}

/// Everything a caller supplies when creating or editing a venture.
///
/// The store assigns `id`, `views` and `reactions` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVenture {
    pub title: String,
    pub venture_name: String,
    pub year_launched: i32,
    #[serde(default)]
    pub year_closed: Option<i32>,
    #[serde(default)]
    pub background_story: String,
    #[serde(default)]
    pub traction_achieved: String,
    #[serde(default)]
    pub autopsy: String,
    #[serde(default)]
    pub lessons_gained: Vec<String>,
    #[serde(default)]
    pub animation: Option<String>,
    #[serde(default)]
    pub product_link: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewVenture {
    /// Minimal field set; narrative fields start empty.
    pub fn new(
        title: impl Into<String>,
        venture_name: impl Into<String>,
        year_launched: i32,
    ) -> Self {
        Self {
            title: title.into(),
            venture_name: venture_name.into(),
            year_launched,
            ..Default::default()
        }
    }

    pub fn closed_in(mut self, year: i32) -> Self {
        self.year_closed = Some(year);
        self
    }

    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lessons_gained.push(lesson.into());
        self
    }

    /// Form-level checks. The store itself accepts unvalidated input.
    ///
    /// Requires a non-blank title and venture name, and a closing year no
    /// earlier than the launch year.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(
            &self.title,
            &self.venture_name,
            self.year_launched,
            self.year_closed,
        )
    }
}

fn check_fields(
    title: &str,
    venture_name: &str,
    year_launched: i32,
    year_closed: Option<i32>,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    if venture_name.trim().is_empty() {
        return Err(ValidationError::empty_field("ventureName"));
    }
    if let Some(closed) = year_closed {
        if closed < year_launched {
            return Err(ValidationError::out_of_range(
                "yearClosed",
                i64::from(year_launched),
                i64::from(i32::MAX),
                i64::from(closed),
            ));
        }
    }
    Ok(())
}
