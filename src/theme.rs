use gloo::console::warn;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

pub const THEME_STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// The ambient theme as seen by anything under a [`ThemeProvider`]. Readers
/// never own the value; they ask the provider to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.emit(self.theme.toggled());
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Where an explicitly chosen theme is kept between visits.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

pub struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn load(&self) -> Option<Theme> {
        LocalStorage::get::<Theme>(THEME_STORAGE_KEY).ok()
    }

    fn save(&self, theme: Theme) {
        if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, theme) {
            warn!(format!("Failed to save theme: {e:?}"));
        }
    }
}

/// A stored choice wins; otherwise follow the OS. Nothing is written here,
/// so the OS keeps deciding until the user picks a theme.
pub fn initial_theme(store: &impl ThemeStore, system_dark: bool) -> Theme {
    match store.load() {
        Some(t) => t,
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// An explicit pick: saved, then returned for display.
pub fn choose_theme(store: &impl ThemeStore, theme: Theme) -> Theme {
    store.save(theme);
    theme
}

fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()).is_err() {
        warn!("Could not update the document theme class");
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page-wide theme: restores it on load, mirrors it onto `<html>`
/// and saves every change the user makes.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| initial_theme(&BrowserStore, system_prefers_dark()));

    use_effect_with(*theme, |t| {
        apply_to_document(*t);
        || ()
    });

    let context = ThemeContext {
        theme: *theme,
        set_theme: {
            let theme = theme.clone();
            Callback::from(move |t: Theme| theme.set(choose_theme(&BrowserStore, t)))
        },
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// False on the first render, true once the component has mounted and the
/// active theme is known.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            || ()
        });
    }
    *mounted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "☀",
            ToggleIcon::Moon => "☾",
        }
    }
}

/// Sun while dark (click for light), moon otherwise.
pub fn icon_for(theme: Theme) -> ToggleIcon {
    if theme.is_dark() {
        ToggleIcon::Sun
    } else {
        ToggleIcon::Moon
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let context = use_context::<ThemeContext>();

    use_effect_with(context.is_none(), |missing| {
        if *missing {
            warn!("ThemeToggle rendered outside a ThemeProvider; hiding it");
        }
        || ()
    });

    let Some(context) = context else {
        return html! {};
    };

    let icon = icon_for(context.theme);
    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.toggle())
    };

    html! {
        <button type="button" class="icon-btn theme-toggle" {onclick}>
            <span class={classes!("icon", if icon == ToggleIcon::Sun { "sun" } else { "moon" })} aria-hidden="true">
                { icon.glyph() }
            </span>
            <span class="sr-only">{"Toggle theme"}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Stand-in for the real provider: holds the value and records writes.
    struct FakeProvider {
        theme: Rc<RefCell<Theme>>,
        writes: Rc<RefCell<Vec<Theme>>>,
    }

    impl FakeProvider {
        fn new(theme: Theme) -> Self {
            Self {
                theme: Rc::new(RefCell::new(theme)),
                writes: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn context(&self) -> ThemeContext {
            let theme = self.theme.clone();
            let writes = self.writes.clone();
            ThemeContext {
                theme: *self.theme.borrow(),
                set_theme: Callback::from(move |t: Theme| {
                    *theme.borrow_mut() = t;
                    writes.borrow_mut().push(t);
                }),
            }
        }
    }

    #[test]
    fn toggled_flips_between_two_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn icon_is_sun_only_in_dark_mode() {
        assert_eq!(icon_for(Theme::Dark), ToggleIcon::Sun);
        assert_eq!(icon_for(Theme::Light), ToggleIcon::Moon);
    }

    #[test]
    fn each_click_writes_exactly_one_flip() {
        let provider = FakeProvider::new(Theme::Light);

        provider.context().toggle();
        assert_eq!(*provider.writes.borrow(), vec![Theme::Dark]);
        assert_eq!(icon_for(*provider.theme.borrow()), ToggleIcon::Sun);

        provider.context().toggle();
        assert_eq!(*provider.writes.borrow(), vec![Theme::Dark, Theme::Light]);
        assert_eq!(icon_for(*provider.theme.borrow()), ToggleIcon::Moon);
    }

    #[test]
    fn stored_form_is_the_plain_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"system\"").is_err());
    }

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<Theme>>,
        saves: RefCell<usize>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn save(&self, theme: Theme) {
            *self.value.borrow_mut() = Some(theme);
            *self.saves.borrow_mut() += 1;
        }
    }

    #[test]
    fn first_visit_follows_the_os_without_saving() {
        let store = MemoryStore::default();
        assert_eq!(initial_theme(&store, true), Theme::Dark);
        assert_eq!(*store.saves.borrow(), 0);

        // OS switched to light before the next visit.
        assert_eq!(initial_theme(&store, false), Theme::Light);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn explicit_choice_is_saved_and_beats_the_os() {
        let store = MemoryStore::default();
        let picked = choose_theme(&store, initial_theme(&store, true).toggled());

        assert_eq!(picked, Theme::Light);
        assert_eq!(*store.saves.borrow(), 1);
        assert_eq!(initial_theme(&store, true), Theme::Light);
    }

    #[function_component(DarkHost)]
    fn dark_host() -> Html {
        let context = ThemeContext { theme: Theme::Dark, set_theme: Callback::noop() };
        html! {
            <ContextProvider<ThemeContext> {context}>
                <ThemeToggle />
            </ContextProvider<ThemeContext>>
        }
    }

    #[function_component(LightHost)]
    fn light_host() -> Html {
        let context = ThemeContext { theme: Theme::Light, set_theme: Callback::noop() };
        html! {
            <ContextProvider<ThemeContext> {context}>
                <ThemeToggle />
            </ContextProvider<ThemeContext>>
        }
    }

    #[tokio::test]
    async fn toggle_is_hidden_without_a_provider() {
        let html = yew::ServerRenderer::<ThemeToggle>::new().hydratable(false).render().await;
        assert_eq!(html, "");
    }

    #[tokio::test]
    async fn toggle_shows_sun_in_dark_and_moon_in_light() {
        let dark = yew::ServerRenderer::<DarkHost>::new().hydratable(false).render().await;
        assert!(dark.contains(ToggleIcon::Sun.glyph()));
        assert!(!dark.contains(ToggleIcon::Moon.glyph()));
        assert!(dark.contains("Toggle theme"));

        let light = yew::ServerRenderer::<LightHost>::new().hydratable(false).render().await;
        assert!(light.contains(ToggleIcon::Moon.glyph()));
        assert!(!light.contains(ToggleIcon::Sun.glyph()));
    }
}
