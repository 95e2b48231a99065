use std::rc::Rc;

use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_COUNT: usize = 10;

pub const FAQ: [FaqEntry; FAQ_COUNT] = [
    FaqEntry {
        question: "Can I submit full albums or EPs?",
        answer: "We welcome EPs and albums. When submitting, simply include the link to your complete work in the submission form.",
    },
    FaqEntry {
        question: "How does the payment process work?",
        answer: "Our payment process is simple:\n1. Sign your track\n2. Complete our payment form\n3. We add your details to our system\n\nYour earnings are then automatically sent to your bank account. Please note there's a 2-3 month delay due to streaming platform schedules. After this initial period, you'll receive monthly payments for any revenue your track generates.",
    },
    FaqEntry {
        question: "Can I work with other artists or labels while signed to Rises?",
        answer: "Yes, you can! We have a no-strings-attached policy. We only sign individual tracks, so you're free to collaborate with other artists, work with different labels, or release independently for your future projects.",
    },
    FaqEntry {
        question: "Do you offer split payments for collaborations?",
        answer: "Yes, we do support split payments for collaborative works.",
    },
    FaqEntry {
        question: "How long does the signing process take?",
        answer: "Thanks to our streamlined, automated process, we typically complete the signing within 48 hours.",
    },
    FaqEntry {
        question: "Which streaming platforms do you distribute to?",
        answer: "We distribute your music to over 150 streaming platforms, including major ones like Spotify, Apple Music, Amazon Music, YouTube Music, Deezer, and Tidal.",
    },
    FaqEntry {
        question: "What file format should I use for my demo?",
        answer: "Please submit your demos in .wav format. This helps streamline the process if your track is selected for signing.",
    },
    FaqEntry {
        question: "What's the recoupment clause in the contract?",
        answer: "The recoupment clause covers potential expenses we might incur on your behalf, such as music video production or marketing costs like photoshoots. Don't worry - we'll always inform you beforehand and give you the option to opt in or out.",
    },
    FaqEntry {
        question: "How can I contact Rises for general inquiries?",
        answer: "For any general inquiries, please reach out to us through our contact page at https://www.rises.agency/#contact",
    },
    FaqEntry {
        question: "What happens after I sign my track with Rises?",
        answer: "Once your track is signed, we'll add it to our playlist network, which has thousands of followers. The specific playlists will depend on your track's genre and overall fit.",
    },
];

/// Open/closed flag per FAQ entry. Entries never affect each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqState {
    open: [bool; FAQ_COUNT],
}

impl Default for FaqState {
    fn default() -> Self {
        Self { open: [false; FAQ_COUNT] }
    }
}

impl FaqState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }
}

pub enum FaqAction {
    Toggle(usize),
}

impl Reducible for FaqState {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FaqAction::Toggle(i) if i < FAQ_COUNT => {
                let mut next = (*self).clone();
                next.open[i] = !next.open[i];
                Rc::new(next)
            }
            FaqAction::Toggle(_) => self,
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let id = format!("faq-{}", props.index + 1);
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                type="button"
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={id.clone()}
                {onclick}
            >
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer" id={id}>{ props.answer.clone() }</div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let state = use_reducer(FaqState::default);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |i: usize| state.dispatch(FaqAction::Toggle(i)))
    };

    html! {
        <div class="faq">
            { for FAQ.iter().enumerate().map(|(i, entry)| html! {
                <FaqItem
                    key={i}
                    index={i}
                    question={entry.question}
                    answer={entry.answer}
                    open={state.is_open(i)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
