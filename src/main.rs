mod constraints;
mod controls;
mod draft;
mod faq;
mod form;
mod submit;
mod theme;

use yew::prelude::*;

use form::DemoSubmissionForm;
use theme::ThemeProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <main>
                <DemoSubmissionForm />
            </main>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
