use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdTerminal};
use dioxus_free_icons::Icon;
use ui::components::{
    Alert, AlertDescription, AlertTitle, AlertVariant, Avatar, AvatarFallback, AvatarImage,
    Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Separator, Skeleton, Table, TableBody, TableCaption, TableCell,
    TableFooter, TableHead, TableHeader, TableRow, Typography, TypographyTag, TypographyVariant,
};
use ui::VariantKey;

use crate::story::{Story, StoryPage};

const INVOICES: &[(&str, &str, &str)] = &[
    ("INV001", "Paid", "$250.00"),
    ("INV002", "Pending", "$150.00"),
    ("INV003", "Unpaid", "$350.00"),
];

#[component]
pub fn Display() -> Element {
    rsx! {
        StoryPage {
            title: "Display",
            summary: "Static containers and text styles.",
            Story { title: "Card",
                Card { class: "w-80",
                    CardHeader {
                        CardTitle { "Notifications" }
                        CardDescription { "You have 3 unread messages." }
                        CardAction {
                            Button { variant: ButtonVariant::Link, size: ButtonSize::Sm, "Mark read" }
                        }
                    }
                    CardContent { "Push notifications are enabled for this device." }
                    CardFooter {
                        Button { class: "w-full", "Open inbox" }
                    }
                }
            }
            Story { title: "Alert",
                div { class: "grid w-full gap-4",
                    Alert {
                        Icon::<LdTerminal> { icon: LdTerminal, width: 16, height: 16 }
                        AlertTitle { "Heads up!" }
                        AlertDescription { "Components take classes from the caller last." }
                    }
                    Alert { variant: AlertVariant::Destructive,
                        Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 16, height: 16 }
                        AlertTitle { "Session expired" }
                        AlertDescription { "Please sign in again." }
                    }
                }
            }
            Story { title: "Avatar",
                Avatar {
                    AvatarImage { src: "https://github.com/dioxuslabs.png" }
                    AvatarFallback { "DX" }
                }
                Avatar {
                    AvatarFallback { "AB" }
                }
            }
            Story { title: "Skeleton",
                div { class: "flex items-center gap-4",
                    Skeleton { class: "size-12 rounded-full" }
                    div { class: "flex flex-col gap-2",
                        Skeleton { class: "h-4 w-60" }
                        Skeleton { class: "h-4 w-48" }
                    }
                }
            }
            Story { title: "Separator",
                div { class: "flex w-full flex-col gap-4",
                    span { class: "text-sm", "Above" }
                    Separator {}
                    div { class: "flex h-5 items-center gap-4 text-sm",
                        span { "Blog" }
                        Separator { horizontal: false }
                        span { "Docs" }
                    }
                }
            }
            Story { title: "Typography",
                div { class: "flex w-full flex-col",
                    for variant in TypographyVariant::ALL.iter().copied() {
                        if variant == TypographyVariant::List {
                            Typography { key: "{variant.key()}", variant,
                                li { "First item" }
                                li { "Second item" }
                            }
                        } else {
                            Typography { key: "{variant.key()}", variant, "The {variant.key()} style" }
                        }
                    }
                    Typography {
                        variant: TypographyVariant::H3,
                        as_tag: TypographyTag::Span,
                        "An h3-styled span"
                    }
                }
            }
            Story { title: "Table",
                Table {
                    TableCaption { "Recent invoices." }
                    TableHeader {
                        TableRow {
                            TableHead { "Invoice" }
                            TableHead { "Status" }
                            TableHead { class: "text-right", "Amount" }
                        }
                    }
                    TableBody {
                        for (id, status, amount) in INVOICES.iter() {
                            TableRow { key: "{id}",
                                TableCell { class: "font-medium", "{id}" }
                                TableCell { "{status}" }
                                TableCell { class: "text-right", "{amount}" }
                            }
                        }
                    }
                    TableFooter {
                        TableRow {
                            TableCell { "Total" }
                            TableCell { "" }
                            TableCell { class: "text-right", "$750.00" }
                        }
                    }
                }
            }
        }
    }
}
