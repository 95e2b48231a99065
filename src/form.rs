use yew::prelude::*;

use crate::controls::{GenreSelect, TextAreaField, TextField, YesNoField};
use crate::draft::{reveal, DraftAction, Field, SubmissionDraft};
use crate::faq::Faq;
use crate::submit::{log_sink, submit_or_warn};
use crate::theme::{use_mounted, ThemeToggle};

pub const LOGO_PATH: &str = "/rises.jpg";

#[derive(Properties, PartialEq, Default)]
pub struct DemoSubmissionFormProps {
    /// Receives the draft once the browser lets the form submit. Defaults to
    /// a console log.
    #[prop_or_default]
    pub on_submit: Option<Callback<SubmissionDraft>>,
}

#[function_component(DemoSubmissionForm)]
pub fn demo_submission_form(props: &DemoSubmissionFormProps) -> Html {
    let draft = use_reducer(SubmissionDraft::default);
    let mounted = use_mounted();

    let on_action = {
        let draft = draft.clone();
        Callback::from(move |action: DraftAction| draft.dispatch(action))
    };

    let onsubmit = {
        let draft = draft.clone();
        let sink = props.on_submit.clone().unwrap_or_else(log_sink);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_or_warn(&draft, &sink);
        })
    };

    // Nothing until the ambient theme is settled, so there is no flash of
    // the wrong one.
    if !mounted {
        return html! {};
    }

    html! {
        <FormBody draft={(*draft).clone()} {on_action} {onsubmit} />
    }
}

#[derive(Properties, PartialEq)]
pub struct FormBodyProps {
    pub draft: SubmissionDraft,
    pub on_action: Callback<DraftAction>,
    pub onsubmit: Callback<SubmitEvent>,
}

#[function_component(FormBody)]
pub fn form_body(props: &FormBodyProps) -> Html {
    let draft = &props.draft;
    let on_action = &props.on_action;
    let onsubmit = props.onsubmit.clone();

    let shown = reveal(draft);
    let text = |field: Field, label: &'static str| {
        html! {
            <TextField {field} {label} value={draft.get(field).to_string()} on_action={on_action.clone()} />
        }
    };

    html! {
        <div class="wrap">
            <ThemeToggle />
            <div class="card">
                <div class="hd">
                    <img class="logo" src={LOGO_PATH} alt="Rises Functional Music Logo" width="100" height="100" />
                    <h1>{"Rises Functional Music"}</h1>
                    <p class="sub">{"Submit your demo for consideration"}</p>
                    <p class="small">
                        {"If accepted, you'll enjoy: non-exclusive deals, exposure to our playlist fans, artist-centric support, professional cover art, fair revenue splits, and monthly payments."}
                    </p>
                </div>

                <form class="bd" {onsubmit}>
                    <div class="row">
                        { text(Field::FirstName, "First Name") }
                        { text(Field::LastName, "Last Name") }
                    </div>
                    <TextField
                        field={Field::Email}
                        label="Email"
                        input_type="email"
                        value={draft.email.clone()}
                        on_action={on_action.clone()}
                    />
                    { text(Field::ArtistName, "Artist Name / Stage Name") }
                    <YesNoField
                        field={Field::IsOver18}
                        label="Are you over 18 years old?"
                        id_prefix="over18"
                        value={draft.is_over18.clone()}
                        on_action={on_action.clone()}
                    />
                    { text(Field::Origin, "Where are you from?") }
                    <YesNoField
                        field={Field::HasSpotifyMusic}
                        label="Do you have any music live on Spotify?"
                        id_prefix="spotify"
                        value={draft.has_spotify_music.clone()}
                        on_action={on_action.clone()}
                    />
                    if shown.spotify_url {
                        { text(Field::SpotifyUrl, "What's your Spotify profile URL?") }
                    }
                    <TextField
                        field={Field::DemoName}
                        label="What's the name of your demo?"
                        value={draft.demo_name.clone()}
                        help={AttrValue::from("You can change this later.")}
                        on_action={on_action.clone()}
                    />
                    { text(Field::ListeningLink, "Listening link (SoundCloud, Dropbox, Google Drive)") }
                    <GenreSelect
                        label="In what music genre would you categorize your demo?"
                        value={draft.genre.clone()}
                        on_action={on_action.clone()}
                    />
                    <YesNoField
                        field={Field::HasCollaborators}
                        label="Does your song have any collaborators?"
                        id_prefix="collab"
                        value={draft.has_collaborators.clone()}
                        on_action={on_action.clone()}
                    />
                    if shown.collaborators {
                        <TextAreaField
                            field={Field::Collaborators}
                            label="Please list your collaborators"
                            placeholder="List collaborators separated by commas (e.g., Dua Lipa, Angèle)"
                            value={draft.collaborators.clone()}
                            help={AttrValue::from("Do not include yourself here.")}
                            on_action={on_action.clone()}
                        />
                    }
                    <button type="submit" class="primary wide">{"Submit Demo"}</button>
                </form>

                <div class="ft">
                    <Faq />
                </div>
            </div>
        </div>
    }
}
