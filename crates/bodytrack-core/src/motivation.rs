//! Fixed set of motivational quotes served alongside the dashboard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 5] = [
    Quote {
        text: "The only bad workout is the one that didn't happen.",
        author: "Unknown",
    },
    Quote {
        text: "Your body can stand almost anything. It's your mind you have to convince.",
        author: "Unknown",
    },
    Quote {
        text: "Strength does not come from the physical capacity. It comes from an indomitable will.",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "The difference between the impossible and the possible lies in determination.",
        author: "Tommy Lasorda",
    },
    Quote {
        text: "Don't wish for it. Work for it.",
        author: "Unknown",
    },
];

/// Quote for a rotating cursor; wraps around the list.
pub fn quote_at(cursor: usize) -> Quote {
    QUOTES[cursor % QUOTES.len()]
}
