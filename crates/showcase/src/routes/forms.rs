use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Checkbox, CheckboxIndicator, CheckboxState, Input, Label, Progress,
    ProgressIndicator, Select, SelectContent, SelectGroup, SelectGroupLabel, SelectItem,
    SelectItemIndicator, SelectSeparator, SelectTrigger, SelectValue, Switch, SwitchThumb,
    Textarea,
};

use crate::story::{Story, StoryPage};

const FRUITS: &[&str] = &["Apple", "Banana", "Blueberry"];
const VEGETABLES: &[&str] = &["Carrot", "Leek"];

#[component]
pub fn Forms() -> Element {
    let mut email = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut airplane = use_signal(|| false);
    let mut terms = use_signal(|| false);
    let mut produce = use_signal(|| None::<String>);
    let mut upload = use_signal(|| 35.0);

    let email_invalid = !email.read().is_empty() && !email.read().contains('@');

    rsx! {
        StoryPage {
            title: "Forms",
            summary: "Native inputs are controlled by the page; the rest wrap the primitives.",
            Story { title: "Input",
                div { class: "grid w-80 gap-2",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        invalid: email_invalid,
                        on_input: move |evt: FormEvent| email.set(evt.value()),
                    }
                    if email_invalid {
                        p { class: "text-destructive text-sm", "Enter a valid address." }
                    }
                }
                Input { class: "w-60", placeholder: "Disabled", disabled: true }
            }
            Story { title: "Textarea",
                div { class: "grid w-96 gap-2",
                    Label { html_for: "notes", "Notes" }
                    Textarea {
                        id: "notes",
                        placeholder: "Type your message here.",
                        value: notes(),
                        on_input: move |evt: FormEvent| notes.set(evt.value()),
                    }
                    p { class: "text-muted-foreground text-sm", "{notes.read().chars().count()} characters" }
                }
            }
            Story { title: "Switch",
                div { class: "flex items-center gap-2",
                    Switch {
                        checked: Some(airplane()),
                        on_checked_change: move |value: bool| airplane.set(value),
                        SwitchThumb {}
                    }
                    span { class: "text-sm", if airplane() { "Airplane mode on" } else { "Airplane mode off" } }
                }
            }
            Story { title: "Checkbox",
                div { class: "flex items-center gap-2",
                    Checkbox {
                        default_checked: CheckboxState::Unchecked,
                        on_checked_change: move |state: CheckboxState| {
                            terms.set(matches!(state, CheckboxState::Checked));
                        },
                        CheckboxIndicator {}
                    }
                    span { class: "text-sm", "Accept terms and conditions" }
                }
                Button { disabled: !terms(), "Continue" }
            }
            Story { title: "Select",
                Select::<String> {
                    placeholder: "Pick produce",
                    on_value_change: move |value: Option<String>| produce.set(value),
                    SelectTrigger { class: "w-48",
                        SelectValue {}
                    }
                    SelectContent {
                        SelectGroup {
                            SelectGroupLabel { "Fruits" }
                            for (idx, fruit) in FRUITS.iter().enumerate() {
                                SelectItem::<String> { key: "{fruit}", value: fruit.to_string(), index: idx,
                                    "{fruit}"
                                    SelectItemIndicator {}
                                }
                            }
                        }
                        SelectSeparator {}
                        SelectGroup {
                            SelectGroupLabel { "Vegetables" }
                            for (idx, vegetable) in VEGETABLES.iter().enumerate() {
                                SelectItem::<String> {
                                    key: "{vegetable}",
                                    value: vegetable.to_string(),
                                    index: FRUITS.len() + idx,
                                    "{vegetable}"
                                    SelectItemIndicator {}
                                }
                            }
                        }
                    }
                }
                span { class: "text-muted-foreground text-sm",
                    {match produce() {
                        Some(value) => rsx! { "Selected: {value}" },
                        None => rsx! { "Nothing selected" },
                    }}
                }
            }
            Story { title: "Progress",
                div { class: "flex w-96 flex-col gap-3",
                    Progress { value: Some(upload()),
                        ProgressIndicator {}
                    }
                    div { class: "flex gap-2",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| upload.set(f64::max(upload() - 10.0, 0.0)),
                            "-10%"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| upload.set(f64::min(upload() + 10.0, 100.0)),
                            "+10%"
                        }
                    }
                }
            }
        }
    }
}
