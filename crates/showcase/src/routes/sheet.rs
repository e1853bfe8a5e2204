use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Input, Label, Sheet, SheetContent, SheetDescription, SheetFooter,
    SheetHeader, SheetSide, SheetTitle, SheetTrigger,
};
use ui::VariantKey;

use crate::story::{Story, StoryPage};

#[component]
pub fn SheetStory() -> Element {
    let mut open = use_signal(|| false);
    let mut side = use_signal(|| None::<SheetSide>);
    let mut name = use_signal(|| "Pedro Duarte".to_string());
    let mut draft = use_signal(String::new);

    rsx! {
        StoryPage {
            title: "Sheet",
            summary: "Open a sheet, then press Escape or click the backdrop: focus returns to the trigger.",
            Story {
                title: "Edge",
                description: "Without a side the configured default is used.",
                for candidate in SheetSide::ALL.iter().copied() {
                    SheetTrigger {
                        key: "{candidate.key()}",
                        open: open() && side() == Some(candidate),
                        on_open_change: move |next: bool| {
                            side.set(Some(candidate));
                            open.set(next);
                        },
                        "{candidate.key()}"
                    }
                }
                SheetTrigger {
                    open: open() && side().is_none(),
                    variant: ButtonVariant::Default,
                    on_open_change: move |next: bool| {
                        side.set(None);
                        draft.set(name());
                        open.set(next);
                    },
                    "Edit profile"
                }
            }
            Story { title: "State",
                p { class: "text-sm", "Profile name: {name}" }
            }
        }
        Sheet {
            open: open(),
            on_open_change: move |next: bool| open.set(next),
            side: side(),
            SheetHeader {
                SheetTitle { "Edit profile" }
                SheetDescription { "Make changes to your profile here. Save when you're done." }
            }
            SheetContent { class: "grid auto-rows-min gap-3",
                Label { html_for: "sheet-name", "Name" }
                Input {
                    id: "sheet-name",
                    value: draft(),
                    on_input: move |evt: FormEvent| draft.set(evt.value()),
                }
            }
            SheetFooter {
                Button {
                    onclick: move |_| {
                        name.set(draft());
                        open.set(false);
                    },
                    "Save changes"
                }
                Button { variant: ButtonVariant::Outline, onclick: move |_| open.set(false), "Cancel" }
            }
        }
    }
}
