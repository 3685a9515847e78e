//! The base HTML layout and the style constants shared between views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

// Link styles
pub const LINK_STYLE: &str = "text-blue-400 hover:text-blue-300 underline";

// The phone-shaped screen container every page renders into.
pub const SCREEN_STYLE: &str =
    "flex flex-col min-h-screen max-w-md mx-auto bg-black text-white pb-8";

pub const SCREEN_HEADER_STYLE: &str = "px-4 py-2";

// List card styles
pub const LIST_CARD_STYLE: &str =
    "bg-gray-900 rounded-lg overflow-hidden divide-y divide-gray-800";

pub const LIST_ROW_STYLE: &str = "p-4 flex items-center justify-between";

// Section heading row with a label on the left and a figure on the right.
pub const SECTION_HEADER_STYLE: &str = "flex justify-between items-center mb-2";

// Summary card used on the dashboard and analytics pages.
pub const SUMMARY_CARD_STYLE: &str = "bg-gray-800/80 rounded-lg p-4";

// Badge style for status and campaign labels.
pub const BADGE_STYLE: &str =
    "inline-flex items-center px-2.5 py-0.5 text-xs font-semibold rounded-full";

/// An extra element to place in the head of the page.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// Wraps `content` in the shared page skeleton.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Billfold" }
                link href="/static/main.css" rel="stylesheet";

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="min-h-screen bg-gray-950"
            {
                (content)
            }
        }
    }
}

/// A full-page error view with a header code, a description and a hint.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(SCREEN_STYLE)
        {
            div class="py-16 px-4 mx-auto text-center"
            {
                h1 class="mb-4 text-7xl tracking-tight font-extrabold text-blue-500"
                {
                    (header)
                }

                p class="mb-4 text-3xl tracking-tight font-bold"
                {
                    (description)
                }

                p class="mb-4 text-xl tracking-tight text-gray-400"
                {
                    (fix)
                }

                a href="/" class=(LINK_STYLE)
                {
                    "Back to Home"
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE)
        {
            (text)
        }
    )
}
