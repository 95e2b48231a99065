use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::constraints::is_required;
use crate::draft::{DraftAction, Field, Genre, YesNo};

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub field: Field,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_action: Callback<DraftAction>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub help: Option<AttrValue>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_action.emit(DraftAction::edit(field, value));
        })
    };

    html! {
        <div class="field">
            <label for={field.name()}>{ props.label.clone() }</label>
            <input
                id={field.name()}
                name={field.name()}
                type={props.input_type.clone()}
                required={is_required(field)}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(help) = &props.help {
                <p class="help">{ help.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub field: Field,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_action: Callback<DraftAction>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub help: Option<AttrValue>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_action.emit(DraftAction::edit(field, value));
        })
    };

    html! {
        <div class="field">
            <label for={field.name()}>{ props.label.clone() }</label>
            <textarea
                id={field.name()}
                name={field.name()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(help) = &props.help {
                <p class="help">{ help.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct YesNoFieldProps {
    pub field: Field,
    pub label: AttrValue,
    /// Prefix for the two radio ids, e.g. "spotify" gives "spotify-yes".
    pub id_prefix: AttrValue,
    pub value: AttrValue,
    pub on_action: Callback<DraftAction>,
}

#[function_component(YesNoField)]
pub fn yes_no_field(props: &YesNoFieldProps) -> Html {
    let field = props.field;

    let option = |choice: YesNo| {
        let id = format!("{}-{}", props.id_prefix, choice.value());
        let onchange = {
            let on_action = props.on_action.clone();
            Callback::from(move |e: Event| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                on_action.emit(DraftAction::edit(field, value));
            })
        };
        html! {
            <div class="radio">
                <input
                    type="radio"
                    id={id.clone()}
                    name={field.name()}
                    value={choice.value()}
                    checked={props.value.as_str() == choice.value()}
                    {onchange}
                />
                <label for={id}>{ choice.label() }</label>
            </div>
        }
    };

    html! {
        <div class="field">
            <span class="label">{ props.label.clone() }</span>
            <div class="radio-group" role="radiogroup">
                { option(YesNo::Yes) }
                { option(YesNo::No) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GenreSelectProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_action: Callback<DraftAction>,
}

#[function_component(GenreSelect)]
pub fn genre_select(props: &GenreSelectProps) -> Html {
    let field = Field::Genre;
    let onchange = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_action.emit(DraftAction::edit(field, value));
        })
    };

    html! {
        <div class="field">
            <label for={field.name()}>{ props.label.clone() }</label>
            <select id={field.name()} name={field.name()} {onchange}>
                <option value="" disabled=true hidden=true selected={props.value.is_empty()}>
                    {"Select a genre"}
                </option>
                { for Genre::ALL.iter().map(|g| html! {
                    <option value={g.value()} selected={props.value.as_str() == g.value()}>{ g.label() }</option>
                }) }
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn required_text_field_carries_the_native_constraint() {
        let html = yew::ServerRenderer::<TextField>::with_props(|| TextFieldProps {
            field: Field::Email,
            label: "Email".into(),
            value: "ada@example.com".into(),
            on_action: Callback::noop(),
            input_type: "email".into(),
            help: None,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("required"));
        assert!(html.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn optional_text_field_is_not_required() {
        let html = yew::ServerRenderer::<TextField>::with_props(|| TextFieldProps {
            field: Field::SpotifyUrl,
            label: "Spotify".into(),
            value: "".into(),
            on_action: Callback::noop(),
            input_type: "text".into(),
            help: Some("hint".into()),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"id="spotifyUrl""#));
        assert!(!html.contains("required"));
        assert!(html.contains("hint"));
    }

    #[tokio::test]
    async fn radio_group_checks_only_the_stored_choice() {
        let render = |value: &'static str| {
            yew::ServerRenderer::<YesNoField>::with_props(move || YesNoFieldProps {
                field: Field::HasSpotifyMusic,
                label: "Spotify?".into(),
                id_prefix: "spotify".into(),
                value: value.into(),
                on_action: Callback::noop(),
            })
            .hydratable(false)
            .render()
        };

        let unset = render("").await;
        assert!(unset.contains(r#"id="spotify-yes""#));
        assert!(unset.contains(r#"id="spotify-no""#));
        assert_eq!(unset.matches("checked").count(), 0);

        let yes = render("yes").await;
        assert_eq!(yes.matches("checked").count(), 1);
    }

    #[tokio::test]
    async fn genre_select_offers_the_three_genres() {
        let render = |value: &'static str| {
            yew::ServerRenderer::<GenreSelect>::with_props(move || GenreSelectProps {
                label: "Genre".into(),
                value: value.into(),
                on_action: Callback::noop(),
            })
            .hydratable(false)
            .render()
        };

        let unset = render("").await;
        assert!(unset.contains("Select a genre"));
        for g in Genre::ALL {
            assert!(unset.contains(g.value()));
            assert!(unset.contains(g.label()));
        }
        // Only the placeholder is selected.
        assert_eq!(unset.matches("selected").count(), 1);

        let picked = render("dark-ambient").await;
        assert_eq!(picked.matches("selected").count(), 1);
    }
}
