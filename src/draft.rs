use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

/// Wire names of every field in a demo submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    ArtistName,
    IsOver18,
    Origin,
    HasSpotifyMusic,
    SpotifyUrl,
    DemoName,
    ListeningLink,
    Genre,
    HasCollaborators,
    Collaborators,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::ArtistName,
        Field::IsOver18,
        Field::Origin,
        Field::HasSpotifyMusic,
        Field::SpotifyUrl,
        Field::DemoName,
        Field::ListeningLink,
        Field::Genre,
        Field::HasCollaborators,
        Field::Collaborators,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::ArtistName => "artistName",
            Field::IsOver18 => "isOver18",
            Field::Origin => "origin",
            Field::HasSpotifyMusic => "hasSpotifyMusic",
            Field::SpotifyUrl => "spotifyUrl",
            Field::DemoName => "demoName",
            Field::ListeningLink => "listeningLink",
            Field::Genre => "genre",
            Field::HasCollaborators => "hasCollaborators",
            Field::Collaborators => "collaborators",
        }
    }

    /// Set by picking one of a fixed set of options rather than typing.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            Field::IsOver18 | Field::HasSpotifyMusic | Field::Genre | Field::HasCollaborators
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn value(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    SleepyLofi,
    DarkAmbient,
    LofiHipHop,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::SleepyLofi, Genre::DarkAmbient, Genre::LofiHipHop];

    pub fn value(self) -> &'static str {
        match self {
            Genre::SleepyLofi => "sleepy-lofi",
            Genre::DarkAmbient => "dark-ambient",
            Genre::LofiHipHop => "lofi-hip-hop",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::SleepyLofi => "Sleepy Lofi",
            Genre::DarkAmbient => "Dark Ambient / Ambient",
            Genre::LofiHipHop => "Lofi Hip Hop",
        }
    }
}

/// One in-progress demo submission. Every field is always present; an
/// untouched field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub artist_name: String,
    pub is_over18: String,
    pub origin: String,
    pub has_spotify_music: String,
    pub spotify_url: String,
    pub demo_name: String,
    pub listening_link: String,
    pub genre: String,
    pub has_collaborators: String,
    pub collaborators: String,
}

impl SubmissionDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::ArtistName => &self.artist_name,
            Field::IsOver18 => &self.is_over18,
            Field::Origin => &self.origin,
            Field::HasSpotifyMusic => &self.has_spotify_music,
            Field::SpotifyUrl => &self.spotify_url,
            Field::DemoName => &self.demo_name,
            Field::ListeningLink => &self.listening_link,
            Field::Genre => &self.genre,
            Field::HasCollaborators => &self.has_collaborators,
            Field::Collaborators => &self.collaborators,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::ArtistName => &mut self.artist_name,
            Field::IsOver18 => &mut self.is_over18,
            Field::Origin => &mut self.origin,
            Field::HasSpotifyMusic => &mut self.has_spotify_music,
            Field::SpotifyUrl => &mut self.spotify_url,
            Field::DemoName => &mut self.demo_name,
            Field::ListeningLink => &mut self.listening_link,
            Field::Genre => &mut self.genre,
            Field::HasCollaborators => &mut self.has_collaborators,
            Field::Collaborators => &mut self.collaborators,
        }
    }

    /// Returns a copy with only `field` replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot(field) = value.into();
        next
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Which conditional fields are on screen. Derived fresh from the draft on
/// every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub spotify_url: bool,
    pub collaborators: bool,
}

pub fn reveal(draft: &SubmissionDraft) -> Reveal {
    Reveal {
        spotify_url: draft.has_spotify_music == YesNo::Yes.value(),
        collaborators: draft.has_collaborators == YesNo::Yes.value(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    /// Typed text from an input or text area.
    Input { field: Field, value: String },
    /// A picked option from a radio group or the genre select.
    Select { field: Field, value: String },
}

impl DraftAction {
    /// The action a control for `field` produces when its value changes.
    pub fn edit(field: Field, value: String) -> Self {
        if field.is_choice() {
            DraftAction::Select { field, value }
        } else {
            DraftAction::Input { field, value }
        }
    }
}

impl Reducible for SubmissionDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Input { field, value } | DraftAction::Select { field, value } => {
                Rc::new(self.with(field, value))
            }
        }
    }
}
