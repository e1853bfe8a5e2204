use crate::map::TokenMap;

pub const SPACING: TokenMap = TokenMap::new(
    "spacing",
    &[
        ("0", "0px"),
        ("px", "1px"),
        ("0.5", "0.125rem"),
        ("1", "0.25rem"),
        ("1.5", "0.375rem"),
        ("2", "0.5rem"),
        ("2.5", "0.625rem"),
        ("3", "0.75rem"),
        ("3.5", "0.875rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("7", "1.75rem"),
        ("8", "2rem"),
        ("9", "2.25rem"),
        ("10", "2.5rem"),
        ("11", "2.75rem"),
        ("12", "3rem"),
        ("14", "3.5rem"),
        ("16", "4rem"),
        ("20", "5rem"),
        ("24", "6rem"),
        ("32", "8rem"),
        ("40", "10rem"),
        ("48", "12rem"),
        ("64", "16rem"),
        ("80", "20rem"),
        ("96", "24rem"),
    ],
);

/// Max-width scale, also used for sheet and dialog widths.
pub const SIZES: TokenMap = TokenMap::new(
    "size",
    &[
        ("xs", "20rem"),
        ("sm", "24rem"),
        ("md", "28rem"),
        ("lg", "32rem"),
        ("xl", "36rem"),
        ("2xl", "42rem"),
        ("3xl", "48rem"),
        ("4xl", "56rem"),
        ("5xl", "64rem"),
        ("6xl", "72rem"),
        ("7xl", "80rem"),
        ("full", "100%"),
        ("screen", "100vw"),
    ],
);

pub const SHADOWS: TokenMap = TokenMap::new(
    "shadow",
    &[
        ("xs", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        ("sm", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
        ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
        ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
        ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
        ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
        ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
        ("none", "0 0 #0000"),
    ],
);

pub const BORDER_RADIUS: TokenMap = TokenMap::new(
    "radius",
    &[
        ("none", "0px"),
        ("sm", "0.25rem"),
        ("md", "0.375rem"),
        ("lg", "0.5rem"),
        ("xl", "0.75rem"),
        ("2xl", "1rem"),
        ("full", "9999px"),
    ],
);

pub const BORDER_WIDTH: TokenMap = TokenMap::new(
    "border-width",
    &[("0", "0px"), ("default", "1px"), ("2", "2px"), ("4", "4px"), ("8", "8px")],
);

/// Motion tokens: durations and easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transitions {
    pub duration: TokenMap,
    pub easing: TokenMap,
}

pub const TRANSITIONS: Transitions = Transitions {
    duration: TokenMap::new(
        "duration",
        &[
            ("75", "75ms"),
            ("100", "100ms"),
            ("150", "150ms"),
            ("200", "200ms"),
            ("300", "300ms"),
            ("500", "500ms"),
            ("700", "700ms"),
            ("1000", "1000ms"),
        ],
    ),
    easing: TokenMap::new(
        "ease",
        &[
            ("linear", "linear"),
            ("in", "cubic-bezier(0.4, 0, 1, 1)"),
            ("out", "cubic-bezier(0, 0, 0.2, 1)"),
            ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
        ],
    ),
};
