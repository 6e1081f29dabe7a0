// content/ - Static page content
//
// The page is inert data compiled into the crate. Nothing here knows
// about reveal state; the renderer pairs the two.

mod data;

pub use data::PAGE;

/// Rich text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
}

pub type Rich = &'static [Inline];

/// Icon glyphs, rendered by the external icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Columns,
    Eye,
    Lightbulb,
    Users,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Columns => "columns",
            Icon::Eye => "eye",
            Icon::Lightbulb => "lightbulb",
            Icon::Users => "users",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Hero,
    Plain,
    Muted,
    Dark,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Hero => "section--hero",
            Theme::Plain => "section--plain",
            Theme::Muted => "section--muted",
            Theme::Dark => "section--dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading {
    /// Full-screen title with a highlighted second line.
    Hero {
        lead: &'static str,
        highlight: &'static str,
        tagline: &'static str,
    },
    Title {
        text: &'static str,
        intro: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub body: &'static [Rich],
}

/// One labelled bullet in a comparison column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonColumn {
    pub artist: &'static str,
    /// Highlighted column gets the accent colour.
    pub accent: bool,
    pub points: &'static [Point],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub columns: &'static [ComparisonColumn],
    pub verdict: Rich,
}

/// Attributes for the external `<model-viewer>` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelViewer {
    pub src: &'static str,
    pub alt: &'static str,
    pub camera_controls: bool,
    pub auto_rotate: bool,
    pub shadow_intensity: f32,
    pub exposure: f32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    Paragraph(Rich),
    /// Boxed aside with an accent border.
    Callout(Card),
    /// Side-by-side cards.
    Cards(&'static [Card]),
    /// Full-width card.
    Panel(Card),
    Comparison(Comparison),
    ModelViewer(ModelViewer),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub theme: Theme,
    pub heading: Heading,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub author: &'static str,
    pub period: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    pub title: &'static str,
    pub lang: &'static str,
    pub sections: &'static [Section],
    pub footer: Footer,
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.id)
    }
}
