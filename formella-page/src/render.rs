// render.rs - Encode the content tree as HTML
//
// Output layout (per section):
//   <section id=ID class="section THEME">
//     <div class="reveal CLASS" data-reveal=ID> heading + blocks </div>
//   </section>
//
// CLASS is `opacity-0` or `fade-in` depending on the reveal predicate.
// The DOM mount swaps it in place on the `data-reveal` wrapper.

use crate::content::{
    Block, Card, Comparison, Footer, Heading, Icon, Inline, ModelViewer, Page, Section,
};
use crate::reveal::{HIDDEN_CLASS, REVEALED_CLASS, reveal_class};

/// Module script for the external `<model-viewer>` element.
pub const MODEL_VIEWER_SCRIPT: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Overrides the glTF path baked into the content.
    pub model_src: Option<&'a str>,
}

/// Page body fragment. `revealed` picks each section's reveal class.
pub fn page(page: &Page, options: &RenderOptions, revealed: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<div class=\"page\">");
    for s in page.sections {
        section(&mut out, s, options, revealed(s.id));
    }
    footer(&mut out, &page.footer);
    out.push_str("</div>");
    out
}

/// Standalone HTML document around [`page`].
pub fn document(page_data: &Page, options: &RenderOptions, revealed: impl Fn(&str) -> bool) -> String {
    let body = page(page_data, options, revealed);
    let mut out = String::with_capacity(body.len() + 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"");
    escape_into(&mut out, page_data.lang);
    out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>");
    escape_into(&mut out, page_data.title);
    out.push_str("</title>\n<script type=\"module\" src=\"");
    escape_into(&mut out, MODEL_VIEWER_SCRIPT);
    out.push_str("\"></script>\n<style>");
    out.push_str(&reveal_css());
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Transition styles for the two reveal classes.
pub fn reveal_css() -> String {
    format!(
        ".{HIDDEN_CLASS}{{opacity:0}}\
         .{REVEALED_CLASS}{{animation:fade-in .8s ease-out forwards}}\
         @keyframes fade-in{{from{{opacity:0;transform:translateY(20px)}}to{{opacity:1;transform:none}}}}"
    )
}

pub fn section(out: &mut String, s: &Section, options: &RenderOptions, revealed: bool) {
    out.push_str("<section id=\"");
    escape_into(out, s.id);
    out.push_str("\" class=\"section ");
    out.push_str(s.theme.class());
    out.push_str("\"><div class=\"reveal ");
    out.push_str(reveal_class(revealed));
    out.push_str("\" data-reveal=\"");
    escape_into(out, s.id);
    out.push_str("\">");

    heading(out, &s.heading);
    for block in s.blocks {
        self::block(out, block, options);
    }

    out.push_str("</div></section>");
}

fn heading(out: &mut String, h: &Heading) {
    match *h {
        Heading::Hero { lead, highlight, tagline } => {
            out.push_str("<h1 class=\"hero__title\">");
            escape_into(out, lead);
            out.push_str("<span class=\"hero__highlight\">");
            escape_into(out, highlight);
            out.push_str("</span></h1><p class=\"hero__tagline\">");
            escape_into(out, tagline);
            out.push_str("</p><div class=\"hero__rule\"></div>");
        }
        Heading::Title { text, intro } => {
            out.push_str("<h2 class=\"section__title\">");
            escape_into(out, text);
            out.push_str("</h2>");
            if let Some(intro) = intro {
                out.push_str("<p class=\"section__intro\">");
                escape_into(out, intro);
                out.push_str("</p>");
            }
        }
    }
}

fn block(out: &mut String, b: &Block, options: &RenderOptions) {
    match b {
        Block::Paragraph(text) => paragraph(out, text, None),
        Block::Callout(c) => card(out, c, "callout", "h3"),
        Block::Cards(cards) => {
            out.push_str("<div class=\"cards\">");
            for c in *cards {
                card(out, c, "card", "h3");
            }
            out.push_str("</div>");
        }
        Block::Panel(c) => card(out, c, "panel", "h3"),
        Block::Comparison(c) => comparison(out, c),
        Block::ModelViewer(v) => model_viewer(out, v, options),
    }
}

fn paragraph(out: &mut String, text: &[Inline], class: Option<&str>) {
    match class {
        Some(class) => {
            out.push_str("<p class=\"");
            out.push_str(class);
            out.push_str("\">");
        }
        None => out.push_str("<p>"),
    }
    for run in text {
        match *run {
            Inline::Text(t) => escape_into(out, t),
            Inline::Strong(t) => {
                out.push_str("<strong>");
                escape_into(out, t);
                out.push_str("</strong>");
            }
        }
    }
    out.push_str("</p>");
}

fn icon(out: &mut String, icon: Icon) {
    out.push_str("<i class=\"icon\" data-lucide=\"");
    out.push_str(icon.name());
    out.push_str("\" aria-hidden=\"true\"></i>");
}

fn card(out: &mut String, c: &Card, class: &str, title_tag: &str) {
    out.push_str("<div class=\"");
    out.push_str(class);
    out.push_str("\"><");
    out.push_str(title_tag);
    out.push_str(" class=\"");
    out.push_str(class);
    out.push_str("__title\">");
    if let Some(i) = c.icon {
        icon(out, i);
    }
    escape_into(out, c.title);
    out.push_str("</");
    out.push_str(title_tag);
    out.push('>');
    for text in c.body {
        paragraph(out, text, None);
    }
    out.push_str("</div>");
}

fn comparison(out: &mut String, c: &Comparison) {
    out.push_str("<div class=\"comparison\"><div class=\"comparison__columns\">");
    for col in c.columns {
        out.push_str("<div class=\"comparison__column");
        if col.accent {
            out.push_str(" comparison__column--accent");
        }
        out.push_str("\"><h3>");
        escape_into(out, col.artist);
        out.push_str("</h3><ul>");
        for p in col.points {
            out.push_str("<li><span class=\"bullet\">•</span><span><strong>");
            escape_into(out, p.label);
            out.push_str(":</strong> ");
            escape_into(out, p.text);
            out.push_str("</span></li>");
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</div>");
    paragraph(out, c.verdict, Some("comparison__verdict"));
    out.push_str("</div>");
}

fn model_viewer(out: &mut String, v: &ModelViewer, options: &RenderOptions) {
    let src = options.model_src.unwrap_or(v.src);
    out.push_str("<div class=\"viewer\"><model-viewer src=\"");
    escape_into(out, src);
    out.push_str("\" alt=\"");
    escape_into(out, v.alt);
    out.push('"');
    if v.camera_controls {
        out.push_str(" camera-controls");
    }
    if v.auto_rotate {
        out.push_str(" auto-rotate");
    }
    out.push_str(&format!(
        " shadow-intensity=\"{}\" exposure=\"{}\" style=\"width:100%;height:{}px;border-radius:1rem\">",
        v.shadow_intensity, v.exposure, v.height_px
    ));
    out.push_str("</model-viewer></div>");
}

fn footer(out: &mut String, f: &Footer) {
    out.push_str("<footer class=\"footer\"><div class=\"footer__rule\"></div><p class=\"footer__author\">");
    escape_into(out, f.author);
    out.push_str("</p><p class=\"footer__period\">");
    escape_into(out, f.period);
    out.push_str("</p><p class=\"footer__caption\">");
    escape_into(out, f.caption);
    out.push_str("</p></footer>");
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
